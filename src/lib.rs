//! Daily Swipe: a higher/lower trivia card game with a once-a-day challenge.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! (phases, guards, grading, challenge selection) has no side effects;
//! everything that touches the clock, the marker store or the content
//! generator runs as an effect against an injected [`effects::GameEnv`].
//!
//! # Core Concepts
//!
//! - **Phases**: `LOADING`, `START`, `PLAYING`, `SUMMARY` via [`core::GamePhase`]
//! - **Challenge selection**: today's set is the day of the year modulo the
//!   catalog size, advancing cyclically
//! - **Daily gate**: finishing today's set writes a date marker; a controller
//!   started later that day rests on the START screen
//!
//! # Example
//!
//! ```rust
//! use daily_swipe::config::GameConfig;
//! use daily_swipe::core::{GamePhase, Guess};
//! use daily_swipe::effects::{FixedClock, GameEnv, MemoryMarkerStore};
//! use daily_swipe::session::SessionController;
//! use chrono::NaiveDate;
//! use std::sync::Arc;
//!
//! # tokio_test_block(async {
//! let env = GameEnv::builder()
//!     .clock(FixedClock(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()))
//!     .markers(Arc::new(MemoryMarkerStore::new()))
//!     .build()
//!     .unwrap();
//!
//! let mut game = SessionController::initialize(env, GameConfig::instant()).await;
//! while game.phase() == GamePhase::Playing {
//!     game.submit_guess(Guess::Higher).await;
//! }
//! assert_eq!(game.phase(), GamePhase::Summary);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread()
//! #         .enable_all()
//! #         .build()
//! #         .unwrap()
//! #         .block_on(f)
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod effects;
pub mod session;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::GameConfig;
pub use core::{GamePhase, Guess, TriviaItem, TriviaSet, UserResult};
pub use effects::GameEnv;
pub use session::SessionController;
