//! Errors raised by the effectful shell.
//!
//! None of these reach the player: the session controller recovers from
//! every one of them and settles into a valid phase.

use crate::effects::violations::PayloadViolation;
use std::time::Duration;
use thiserror::Error;

/// Failures of the daily marker store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Reading marker '{key}' failed: {reason}")]
    Read { key: String, reason: String },

    #[error("Writing marker '{key}' failed: {reason}")]
    Write { key: String, reason: String },

    #[error("Marker file is corrupt: {0}")]
    Corrupt(String),
}

/// Failures of the content generation service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    #[error("No challenge generator configured")]
    NotConfigured,

    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Generator did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Generated payload is not valid JSON: {0}")]
    Malformed(String),

    #[error("Generated payload failed validation ({} violations)", .0.len())]
    Invalid(Vec<PayloadViolation>),
}

/// Umbrella error for effects run against the game environment.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Snapshot serialization failed: {0}")]
    Snapshot(String),
}
