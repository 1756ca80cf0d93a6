//! Content shipped with the game: four authored sets, then templated sets
//! up to a catalog of thirty.

use crate::core::{TriviaItem, TriviaSet};

const CATALOG_SIZE: u32 = 30;

struct Seed {
    id: &'static str,
    name: &'static str,
    proposed: f64,
    actual: f64,
    unit: &'static str,
    context: &'static str,
    fact: &'static str,
    emoji: &'static str,
}

impl From<&Seed> for TriviaItem {
    fn from(seed: &Seed) -> Self {
        TriviaItem {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            proposed_value: seed.proposed,
            actual_value: seed.actual,
            unit: seed.unit.to_string(),
            context: seed.context.to_string(),
            fact: seed.fact.to_string(),
            emoji: seed.emoji.to_string(),
        }
    }
}

#[rustfmt::skip]
const MEGA_CITIES: &[Seed] = &[
    Seed { id: "c1-1", name: "Tokyo", proposed: 30_000_000.0, actual: 37_400_000.0, unit: "People", context: "Greater Metro Population", fact: "Tokyo is the most populous metropolitan area in the world.", emoji: "🇯🇵" },
    Seed { id: "c1-2", name: "New York City", proposed: 12_000_000.0, actual: 8_336_000.0, unit: "People", context: "City Proper Population", fact: "NYC is actually less dense than many realize compared to Asian hubs.", emoji: "🗽" },
    Seed { id: "c1-3", name: "Mumbai", proposed: 15_000_000.0, actual: 21_000_000.0, unit: "People", context: "Metro Population", fact: "Mumbai is the financial capital of India.", emoji: "🇮🇳" },
    Seed { id: "c1-4", name: "London", proposed: 9_500_000.0, actual: 8_900_000.0, unit: "People", context: "City Population", fact: "London's population grew rapidly in the 19th century.", emoji: "🇬🇧" },
    Seed { id: "c1-5", name: "Sao Paulo", proposed: 18_000_000.0, actual: 12_300_000.0, unit: "People", context: "City Proper Population", fact: "It's the largest city in the Southern Hemisphere.", emoji: "🇧🇷" },
];

#[rustfmt::skip]
const NATURES_GIANTS: &[Seed] = &[
    Seed { id: "c2-1", name: "Blue Whale", proposed: 150.0, actual: 190.0, unit: "Tons", context: "Maximum Weight", fact: "Their tongue alone can weigh as much as an elephant.", emoji: "🐋" },
    Seed { id: "c2-2", name: "African Elephant", proposed: 4.0, actual: 6.0, unit: "Tons", context: "Average Adult Weight", fact: "Elephants are the largest land animals.", emoji: "🐘" },
    Seed { id: "c2-3", name: "Giant Sequoia", proposed: 200.0, actual: 275.0, unit: "Feet", context: "Average Height", fact: "Some are estimated to be over 3,000 years old.", emoji: "🌲" },
    Seed { id: "c2-4", name: "Great White Shark", proposed: 15.0, actual: 20.0, unit: "Feet", context: "Maximum Length", fact: "They can swim at speeds of over 35 mph.", emoji: "🦈" },
    Seed { id: "c2-5", name: "Giraffe", proposed: 22.0, actual: 18.0, unit: "Feet", context: "Maximum Height", fact: "Even their newborns are 6 feet tall.", emoji: "🦒" },
];

#[rustfmt::skip]
const TECH_GIANTS: &[Seed] = &[
    Seed { id: "c3-1", name: "Apple", proposed: 2000.0, actual: 3000.0, unit: "Billion USD", context: "Market Cap", fact: "Apple was the first company to reach a $3T market cap.", emoji: "🍎" },
    Seed { id: "c3-2", name: "Tesla", proposed: 900.0, actual: 600.0, unit: "Billion USD", context: "Market Cap", fact: "Market valuation varies wildly based on investor sentiment.", emoji: "🚗" },
    Seed { id: "c3-3", name: "Amazon", proposed: 1200.0, actual: 1800.0, unit: "Billion USD", context: "Market Cap", fact: "Started as an online bookstore in 1994.", emoji: "📦" },
    Seed { id: "c3-4", name: "Microsoft", proposed: 2500.0, actual: 3100.0, unit: "Billion USD", context: "Market Cap", fact: "Microsoft's cloud business is now a major driver.", emoji: "💻" },
    Seed { id: "c3-5", name: "Meta", proposed: 1500.0, actual: 1200.0, unit: "Billion USD", context: "Market Cap", fact: "Owns Facebook, Instagram, and WhatsApp.", emoji: "📱" },
];

#[rustfmt::skip]
const SPEED_RECORDS: &[Seed] = &[
    Seed { id: "c4-1", name: "Cheetah", proposed: 60.0, actual: 75.0, unit: "MPH", context: "Top Speed", fact: "Cheetahs can accelerate from 0 to 60 in 3 seconds.", emoji: "🐆" },
    Seed { id: "c4-2", name: "Peregrine Falcon", proposed: 180.0, actual: 240.0, unit: "MPH", context: "Diving Speed", fact: "The fastest member of the animal kingdom.", emoji: "🦅" },
    Seed { id: "c4-3", name: "Usain Bolt", proposed: 30.0, actual: 27.8, unit: "MPH", context: "Peak Sprint Speed", fact: "Set the 100m world record at 9.58 seconds.", emoji: "⚡" },
    Seed { id: "c4-4", name: "Maglev Train", proposed: 350.0, actual: 375.0, unit: "MPH", context: "Operating Speed Record", fact: "Uses magnetic levitation to move without touching rails.", emoji: "🚄" },
    Seed { id: "c4-5", name: "Sound", proposed: 800.0, actual: 767.0, unit: "MPH", context: "Speed at Sea Level", fact: "Varies depending on temperature and medium.", emoji: "🔊" },
];

const AUTHORED: &[(&str, &[Seed])] = &[
    ("Mega Cities", MEGA_CITIES),
    ("Nature's Giants", NATURES_GIANTS),
    ("Tech Giants", TECH_GIANTS),
    ("Speed Records", SPEED_RECORDS),
];

fn templated_set(id: u32) -> TriviaSet {
    let everest_decoy = 29_000.0 + f64::from(id);
    let seeds = [
        Seed { id: "", name: "Mount Everest", proposed: everest_decoy, actual: 29_032.0, unit: "Feet", context: "Height", fact: "The highest point on Earth.", emoji: "🏔️" },
        Seed { id: "", name: "Amazon River", proposed: 4000.0, actual: 3976.0, unit: "Miles", context: "Length", fact: "Often debated with the Nile for longest river.", emoji: "🌊" },
        Seed { id: "", name: "Mona Lisa", proposed: 50.0, actual: 30.0, unit: "Inches", context: "Height", fact: "Surprisingly small to many first-time viewers.", emoji: "🎨" },
        Seed { id: "", name: "Titanic", proposed: 800.0, actual: 882.0, unit: "Feet", context: "Length", fact: "The largest ship afloat at its time.", emoji: "🚢" },
        Seed { id: "", name: "Moon Distance", proposed: 250_000.0, actual: 238_855.0, unit: "Miles", context: "Average Distance", fact: "The moon is slowly moving away from Earth.", emoji: "🌙" },
    ];

    TriviaSet {
        id,
        topic: format!("Challenge #{id}"),
        items: seeds
            .iter()
            .enumerate()
            .map(|(position, seed)| TriviaItem {
                id: format!("c{id}-{}", position + 1),
                ..TriviaItem::from(seed)
            })
            .collect(),
    }
}

pub(super) fn challenge_sets() -> Vec<TriviaSet> {
    let authored = AUTHORED.iter().zip(1u32..).map(|((topic, seeds), id)| TriviaSet {
        id,
        topic: (*topic).to_string(),
        items: seeds.iter().map(TriviaItem::from).collect(),
    });
    let first_templated = AUTHORED.len() as u32 + 1;

    authored
        .chain((first_templated..=CATALOG_SIZE).map(templated_set))
        .collect()
}
