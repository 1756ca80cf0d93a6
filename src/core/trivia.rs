//! Trivia data model and guess grading.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One comparison card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriviaItem {
    /// Unique within its set.
    pub id: String,
    pub name: String,
    /// Decoy value shown to the player.
    pub proposed_value: f64,
    /// Ground truth used for grading.
    pub actual_value: f64,
    pub unit: String,
    pub context: String,
    pub fact: String,
    pub emoji: String,
}

impl TriviaItem {
    /// Ground truth relative to the decoy, `None` when the two are equal.
    pub fn answer(&self) -> Option<Guess> {
        if self.actual_value > self.proposed_value {
            Some(Guess::Higher)
        } else if self.actual_value < self.proposed_value {
            Some(Guess::Lower)
        } else {
            None
        }
    }
}

/// A numbered, topical, ordered sequence of items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriviaSet {
    pub id: u32,
    pub topic: String,
    pub items: Vec<TriviaItem>,
}

impl TriviaSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&TriviaItem> {
        self.items.get(index)
    }
}

/// The player's claim about ground truth relative to the decoy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Guess {
    Higher,
    Lower,
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Higher => f.write_str("HIGHER"),
            Self::Lower => f.write_str("LOWER"),
        }
    }
}

/// Grade a guess against an item.
///
/// Equal values grade every guess as wrong.
///
/// ```rust
/// use daily_swipe::core::{judge, Guess, TriviaItem};
///
/// let item = TriviaItem {
///     id: "c1".into(),
///     name: "Tokyo".into(),
///     proposed_value: 100.0,
///     actual_value: 150.0,
///     unit: "People".into(),
///     context: "Population".into(),
///     fact: "Big.".into(),
///     emoji: "🇯🇵".into(),
/// };
/// assert!(judge(&item, Guess::Higher));
/// assert!(!judge(&item, Guess::Lower));
/// ```
pub fn judge(item: &TriviaItem, guess: Guess) -> bool {
    item.answer() == Some(guess)
}

/// Outcome of one answered item. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserResult {
    item: TriviaItem,
    guess: Guess,
    correct: bool,
}

impl UserResult {
    /// Grade `guess` against `item` and record the outcome.
    pub fn grade(item: &TriviaItem, guess: Guess) -> Self {
        Self {
            item: item.clone(),
            guess,
            correct: judge(item, guess),
        }
    }

    pub fn item(&self) -> &TriviaItem {
        &self.item
    }

    pub fn guess(&self) -> Guess {
        self.guess
    }

    pub fn correct(&self) -> bool {
        self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(proposed: f64, actual: f64) -> TriviaItem {
        TriviaItem {
            id: "t-1".to_string(),
            name: "Test".to_string(),
            proposed_value: proposed,
            actual_value: actual,
            unit: "Units".to_string(),
            context: "Context".to_string(),
            fact: "Fact".to_string(),
            emoji: "🧪".to_string(),
        }
    }

    #[test]
    fn higher_wins_when_actual_exceeds_decoy() {
        let item = item(100.0, 150.0);
        assert!(judge(&item, Guess::Higher));
        assert!(!judge(&item, Guess::Lower));
    }

    #[test]
    fn lower_wins_when_actual_below_decoy() {
        let item = item(100.0, 50.0);
        assert!(judge(&item, Guess::Lower));
        assert!(!judge(&item, Guess::Higher));
    }

    #[test]
    fn equal_values_grade_both_guesses_wrong() {
        let item = item(100.0, 100.0);
        assert!(!judge(&item, Guess::Higher));
        assert!(!judge(&item, Guess::Lower));
        assert_eq!(item.answer(), None);
    }

    #[test]
    fn grade_captures_item_and_guess() {
        let item = item(29_005.0, 29_032.0);
        let result = UserResult::grade(&item, Guess::Higher);
        assert_eq!(result.item(), &item);
        assert_eq!(result.guess(), Guess::Higher);
        assert!(result.correct());
    }

    #[test]
    fn item_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(item(1.0, 2.0)).unwrap();
        assert_eq!(json["proposedValue"], 1.0);
        assert_eq!(json["actualValue"], 2.0);
    }

    #[test]
    fn guess_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Guess::Lower).unwrap(), "\"LOWER\"");
        assert_eq!(Guess::Higher.to_string(), "HIGHER");
    }
}
