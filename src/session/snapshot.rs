//! Serializable view of a controller for the presentation layer.

use crate::core::{GamePhase, TriviaItem, UserResult, Verdict};
use crate::effects::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Headline numbers of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    /// Whether the finished set was today's challenge.
    pub is_daily: bool,
    pub verdict: Verdict,
}

impl Summary {
    pub fn label(&self) -> &'static str {
        if self.is_daily {
            "Daily Complete"
        } else {
            "Set Complete"
        }
    }
}

/// Everything a renderer needs, captured at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    pub phase: GamePhase,

    /// Identifier of the loaded session, absent before the first load
    pub session_id: Option<Uuid>,

    pub challenge_id: u32,
    pub todays_challenge_id: u32,
    pub topic: Option<String>,

    /// Zero-based position of the card awaiting a guess (PLAYING only)
    pub index: Option<usize>,
    pub total: Option<usize>,
    pub score: usize,

    /// The card awaiting a guess (PLAYING only)
    pub current_item: Option<TriviaItem>,

    /// Full result log (SUMMARY only)
    pub results: Vec<UserResult>,

    pub summary: Option<Summary>,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::Snapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_label_depends_on_daily_flag() {
        let mut summary = Summary {
            score: 5,
            total: 5,
            is_daily: true,
            verdict: Verdict::Perfect,
        };
        assert_eq!(summary.label(), "Daily Complete");
        summary.is_daily = false;
        assert_eq!(summary.label(), "Set Complete");
    }
}
