//! Pure game core.
//!
//! This module holds everything that does not touch the outside world:
//! - Phases via the `State` trait and `GamePhase`
//! - Guard predicates deciding which operations a phase accepts
//! - Immutable phase history and result log
//! - The trivia data model and guess grading
//! - Calendar-driven challenge selection

mod guard;
mod history;
mod results;
mod selector;
mod state;
mod trivia;

pub use guard::{Guard, PhaseGuards};
pub use history::{PhaseChange, PhaseHistory};
pub use results::{ResultLog, Verdict};
pub use selector::{
    daily_marker, day_of_year, next_challenge_id, todays_challenge_id, MARKER_DATE_FORMAT,
};
pub use state::{GamePhase, State};
pub use trivia::{judge, Guess, TriviaItem, TriviaSet, UserResult};
