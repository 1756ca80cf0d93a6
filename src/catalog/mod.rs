//! Static catalog of challenge sets.
//!
//! Lookup is total: an unknown identifier resolves to the first set, so a
//! session can always start.

mod bundled;
pub mod error;

pub use error::CatalogError;

use crate::core::TriviaSet;
use std::collections::HashSet;
use std::num::NonZeroU32;

/// Ordered, validated collection of challenge sets.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    sets: Vec<TriviaSet>,
    size: NonZeroU32,
}

impl Catalog {
    /// Validate and wrap a list of sets.
    ///
    /// Rejects an empty list, duplicate or reserved ids and sets without items.
    pub fn new(sets: Vec<TriviaSet>) -> Result<Self, CatalogError> {
        let size = u32::try_from(sets.len())
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(CatalogError::Empty)?;

        let mut seen = HashSet::new();
        for set in &sets {
            if set.id == 0 {
                return Err(CatalogError::ReservedId);
            }
            if !seen.insert(set.id) {
                return Err(CatalogError::DuplicateId(set.id));
            }
            if set.is_empty() {
                return Err(CatalogError::EmptySet(set.id));
            }
        }

        Ok(Self { sets, size })
    }

    /// Parse a JSON array of sets.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sets: Vec<TriviaSet> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(sets)
    }

    /// The thirty sets shipped with the game.
    pub fn bundled() -> Self {
        let sets = bundled::challenge_sets();
        let size = NonZeroU32::new(sets.len() as u32).unwrap_or(NonZeroU32::MIN);
        Self { sets, size }
    }

    /// Number of sets, the modulus for challenge selection.
    pub fn size(&self) -> NonZeroU32 {
        self.size
    }

    pub fn get(&self, id: u32) -> Option<&TriviaSet> {
        self.sets.iter().find(|set| set.id == id)
    }

    /// Set with `id`, or the first set when `id` is unknown.
    pub fn lookup(&self, id: u32) -> &TriviaSet {
        self.get(id).unwrap_or(&self.sets[0])
    }

    pub fn sets(&self) -> &[TriviaSet] {
        &self.sets
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TriviaItem;

    fn set(id: u32, items: usize) -> TriviaSet {
        TriviaSet {
            id,
            topic: format!("Topic {id}"),
            items: (0..items)
                .map(|i| TriviaItem {
                    id: format!("s{id}-{i}"),
                    name: format!("Item {i}"),
                    proposed_value: 1.0,
                    actual_value: 2.0,
                    unit: "u".to_string(),
                    context: "c".to_string(),
                    fact: "f".to_string(),
                    emoji: "•".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn bundled_catalog_has_thirty_sets() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.size().get(), 30);
        assert_eq!(catalog.sets().len(), 30);
        for (index, set) in catalog.sets().iter().enumerate() {
            assert_eq!(set.id, index as u32 + 1);
            assert_eq!(set.len(), 5);
        }
    }

    #[test]
    fn bundled_catalog_passes_validation() {
        let sets = Catalog::bundled().sets().to_vec();
        assert!(Catalog::new(sets).is_ok());
    }

    #[test]
    fn bundled_values_are_finite_and_non_negative() {
        for set in Catalog::bundled().sets() {
            for item in &set.items {
                assert!(item.proposed_value.is_finite() && item.proposed_value >= 0.0);
                assert!(item.actual_value.is_finite() && item.actual_value >= 0.0);
            }
        }
    }

    #[test]
    fn lookup_falls_back_to_first_set() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.lookup(3).topic, "Tech Giants");
        assert_eq!(catalog.lookup(999).id, 1);
        assert_eq!(catalog.lookup(0).id, 1);
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn rejects_invalid_catalogs() {
        assert_eq!(Catalog::new(vec![]), Err(CatalogError::Empty));
        assert_eq!(
            Catalog::new(vec![set(1, 1), set(1, 2)]),
            Err(CatalogError::DuplicateId(1))
        );
        assert_eq!(Catalog::new(vec![set(2, 0)]), Err(CatalogError::EmptySet(2)));
        assert_eq!(Catalog::new(vec![set(0, 1)]), Err(CatalogError::ReservedId));
    }

    #[test]
    fn loads_catalog_from_json() {
        let json = serde_json::to_string(&vec![set(7, 2), set(9, 1)]).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.size().get(), 2);
        assert_eq!(catalog.lookup(9).id, 9);
        assert_eq!(catalog.lookup(1).id, 7);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
