//! Violations found while validating a generated payload.

use thiserror::Error;

/// Numeric field of a generated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueField {
    Proposed,
    Actual,
}

impl std::fmt::Display for ValueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proposed => f.write_str("proposedValue"),
            Self::Actual => f.write_str("actualValue"),
        }
    }
}

/// A single problem with a generated payload.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PayloadViolation {
    #[error("Topic is empty")]
    EmptyTopic,

    #[error("Payload contains no items")]
    NoItems,

    #[error("Item {index} has an empty name")]
    EmptyName { index: usize },

    #[error("Item {index} has a non-finite {field}")]
    NonFiniteValue { index: usize, field: ValueField },

    #[error("Item {index} has a negative {field}")]
    NegativeValue { index: usize, field: ValueField },

    #[error("Item id '{id}' is used more than once")]
    DuplicateItemId { id: String },
}
