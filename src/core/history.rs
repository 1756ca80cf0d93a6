//! Phase history of a controller.
//!
//! Every phase change is kept as an immutable record, tagged with the load
//! token that was current when it happened.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseChange<S: State> {
    /// Phase being left
    pub from: S,
    /// Phase being entered
    pub to: S,
    /// When the change occurred
    pub timestamp: DateTime<Utc>,
    /// Load token current at the time of the change
    pub load_token: u64,
}

/// Ordered history of phase changes.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use daily_swipe::core::{GamePhase, PhaseChange, PhaseHistory};
/// use chrono::Utc;
///
/// let history = PhaseHistory::new()
///     .record(PhaseChange {
///         from: GamePhase::Loading,
///         to: GamePhase::Playing,
///         timestamp: Utc::now(),
///         load_token: 1,
///     })
///     .record(PhaseChange {
///         from: GamePhase::Playing,
///         to: GamePhase::Summary,
///         timestamp: Utc::now(),
///         load_token: 1,
///     });
///
/// assert_eq!(
///     history.get_path(),
///     vec![&GamePhase::Loading, &GamePhase::Playing, &GamePhase::Summary]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<S: State> {
    changes: Vec<PhaseChange<S>>,
}

impl<S: State> Default for PhaseHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PhaseHistory<S> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: PhaseChange<S>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Phases traversed: the first `from`, then every `to` in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        path.extend(self.changes.iter().map(|change| &change.to));
        path
    }

    /// Number of times `phase` was entered.
    pub fn times_entered(&self, phase: &S) -> usize {
        self.changes.iter().filter(|c| &c.to == phase).count()
    }

    /// Time between the first and last recorded change.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.first()?, self.changes.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn changes(&self) -> &[PhaseChange<S>] {
        &self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GamePhase;

    fn change(from: GamePhase, to: GamePhase, load_token: u64) -> PhaseChange<GamePhase> {
        PhaseChange {
            from,
            to,
            timestamp: Utc::now(),
            load_token,
        }
    }

    #[test]
    fn empty_history_has_no_path() {
        let history: PhaseHistory<GamePhase> = PhaseHistory::new();
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = PhaseHistory::new();
        let next = history.record(change(GamePhase::Loading, GamePhase::Playing, 1));

        assert_eq!(history.changes().len(), 0);
        assert_eq!(next.changes().len(), 1);
    }

    #[test]
    fn counts_entries_per_phase() {
        let history = PhaseHistory::new()
            .record(change(GamePhase::Loading, GamePhase::Playing, 1))
            .record(change(GamePhase::Playing, GamePhase::Summary, 1))
            .record(change(GamePhase::Summary, GamePhase::Loading, 1))
            .record(change(GamePhase::Loading, GamePhase::Playing, 2));

        assert_eq!(history.times_entered(&GamePhase::Playing), 2);
        assert_eq!(history.times_entered(&GamePhase::Summary), 1);
        assert_eq!(history.times_entered(&GamePhase::Start), 0);
        assert_eq!(history.get_path().len(), 5);
        assert_eq!(history.changes()[3].load_token, 2);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = PhaseHistory::new()
            .record(PhaseChange {
                from: GamePhase::Loading,
                to: GamePhase::Playing,
                timestamp: start,
                load_token: 1,
            })
            .record(PhaseChange {
                from: GamePhase::Playing,
                to: GamePhase::Summary,
                timestamp: start + chrono::Duration::seconds(30),
                load_token: 1,
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(30)));
    }
}
