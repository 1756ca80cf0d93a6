//! Catalog error types.

use thiserror::Error;

/// Errors raised while assembling a catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog has no challenge sets")]
    Empty,

    #[error("Challenge id {0} appears more than once")]
    DuplicateId(u32),

    #[error("Challenge id 0 is reserved for generated sets")]
    ReservedId,

    #[error("Challenge {0} has no items")]
    EmptySet(u32),

    #[error("Catalog JSON could not be parsed: {0}")]
    Parse(String),
}
