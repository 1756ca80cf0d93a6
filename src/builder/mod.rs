//! Builder API for assembling the game environment.
//!
//! The marker store is the only capability without a sensible default;
//! everything else falls back to production implementations.

pub mod env;
pub mod error;

pub use env::GameEnvBuilder;
pub use error::BuildError;
