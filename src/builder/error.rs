//! Build errors for the game environment builder.

use thiserror::Error;

/// Errors that can occur when building a [`crate::effects::GameEnv`].
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Marker store not specified. Call .markers(store) before .build()")]
    MissingMarkerStore,
}
