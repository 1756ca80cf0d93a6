//! Phase trait and the game's lifecycle phases.
//!
//! A play session moves through a small set of phases. The trait keeps
//! phase inspection pure so guards and history can reason about phases
//! without touching the session aggregate.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine phases.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: phases are copied into the phase history
/// - `PartialEq`: guards and transitions compare phases
/// - `Debug`: phases show up in diagnostics
/// - `Serialize` + `Deserialize`: phases are part of session snapshots
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used for display and logging.
    fn name(&self) -> &str;

    /// Check if this phase ends a session.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this phase waits on an in-flight operation.
    ///
    /// Default implementation returns `false`.
    fn is_pending(&self) -> bool {
        false
    }
}

/// Lifecycle phase of the session controller.
///
/// ```rust
/// use daily_swipe::core::{GamePhase, State};
///
/// assert_eq!(GamePhase::Playing.name(), "PLAYING");
/// assert!(GamePhase::Summary.is_final());
/// assert!(GamePhase::Loading.is_pending());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// A challenge is being fetched or prepared.
    Loading,
    /// Idle screen, only reachable when today's challenge is already done.
    Start,
    /// An item is awaiting a guess.
    Playing,
    /// All items answered.
    Summary,
}

impl State for GamePhase {
    fn name(&self) -> &str {
        match self {
            Self::Loading => "LOADING",
            Self::Start => "START",
            Self::Playing => "PLAYING",
            Self::Summary => "SUMMARY",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Summary)
    }

    fn is_pending(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_match_wire_names() {
        for phase in [
            GamePhase::Loading,
            GamePhase::Start,
            GamePhase::Playing,
            GamePhase::Summary,
        ] {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, format!("\"{}\"", phase.name()));
        }
    }

    #[test]
    fn only_summary_is_final() {
        assert!(!GamePhase::Loading.is_final());
        assert!(!GamePhase::Start.is_final());
        assert!(!GamePhase::Playing.is_final());
        assert!(GamePhase::Summary.is_final());
    }

    #[test]
    fn only_loading_is_pending() {
        assert!(GamePhase::Loading.is_pending());
        assert!(!GamePhase::Start.is_pending());
        assert!(!GamePhase::Playing.is_pending());
        assert!(!GamePhase::Summary.is_pending());
    }

    #[test]
    fn phase_roundtrips_through_json() {
        let json = serde_json::to_string(&GamePhase::Start).unwrap();
        let phase: GamePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(phase, GamePhase::Start);
    }
}
