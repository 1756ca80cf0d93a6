//! Effectful shell around the pure core.
//!
//! Side effects (reading the clock, touching the marker store, calling the
//! content generator, pausing before a load resolves) live here, behind
//! capability traits carried by [`GameEnv`].
//!
//! # Key Concepts
//!
//! - **Capabilities**: `Clock`, `MarkerStore`, `ChallengeGenerator`, `Pacer`
//! - **Environment**: `GameEnv` bundles one implementation of each
//! - **Effects**: stillwater effects built by `actions` and run against the env

mod actions;
mod env;
pub mod error;
mod generated;
mod store;
pub mod violations;

pub use actions::{daily_done, lookup_challenge, mark_daily_done};
pub use env::{
    ChallengeGenerator, Clock, FixedClock, GameEnv, MarkerStore, NoDelay, Pacer, SleepPacer,
    SystemClock,
};
pub use error::{GenerationError, SessionError, StoreError};
pub use generated::{
    default_topic, fetch_generated, parse_generated, validate_payload, GeneratedItem,
    GeneratedPayload, DEFAULT_EMOJI, GENERATED_CHALLENGE_ID, GENERATION_TOPICS,
};
pub use store::{FileMarkerStore, MemoryMarkerStore};
pub use violations::{PayloadViolation, ValueField};
