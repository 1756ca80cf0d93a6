//! Guard predicates deciding which operations a phase accepts.
//!
//! Guards are pure boolean functions over a phase. The session controller
//! consults them before acting on an external event, so an event that
//! arrives in the wrong phase is ignored rather than treated as a fault.

use super::state::{GamePhase, State};
use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether an operation may run in a phase.
///
/// # Example
///
/// ```rust
/// use daily_swipe::core::{GamePhase, Guard};
///
/// let accepts_guesses = Guard::new(|p: &GamePhase| matches!(p, GamePhase::Playing));
///
/// assert!(accepts_guesses.check(&GamePhase::Playing));
/// assert!(!accepts_guesses.check(&GamePhase::Summary));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that accepts exactly the listed phases.
    pub fn any_of(phases: Vec<S>) -> Self
    where
        S: 'static,
    {
        Self::new(move |current| phases.contains(current))
    }

    /// Check if the guard allows the operation in this phase.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

/// Guards for the three player-facing operations.
#[derive(Clone, Debug)]
pub struct PhaseGuards {
    pub submit_guess: Guard<GamePhase>,
    pub play_next: Guard<GamePhase>,
    pub review_today: Guard<GamePhase>,
}

impl Default for PhaseGuards {
    fn default() -> Self {
        Self {
            submit_guess: Guard::any_of(vec![GamePhase::Playing]),
            play_next: Guard::any_of(vec![GamePhase::Start, GamePhase::Summary]),
            review_today: Guard::any_of(vec![GamePhase::Start]),
        }
    }
}
