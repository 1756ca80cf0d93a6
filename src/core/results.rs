//! Result log of the active session.
//!
//! Like the phase history, the log is append-only: `record` hands back a new
//! log and existing entries never change.

use super::trivia::UserResult;
use serde::{Deserialize, Serialize};

/// Ordered results for one session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultLog {
    results: Vec<UserResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result, returning a new log.
    pub fn record(&self, result: UserResult) -> Self {
        let mut results = self.results.clone();
        results.push(result);
        Self { results }
    }

    /// Number of correct answers.
    pub fn score(&self) -> usize {
        self.results.iter().filter(|r| r.correct()).count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[UserResult] {
        &self.results
    }
}

/// Summary headline for a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every item correct.
    Perfect,
    /// At least three correct.
    OnFire,
    Warmup,
}

impl Verdict {
    pub fn from_score(score: usize, total: usize) -> Self {
        if total > 0 && score == total {
            Self::Perfect
        } else if score >= 3 {
            Self::OnFire
        } else {
            Self::Warmup
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Perfect => "👑",
            Self::OnFire => "🔥",
            Self::Warmup => "😅",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Statistic God! Perfectly guessed.",
            Self::OnFire | Self::Warmup => "Nice intuition! You know your stuff.",
        }
    }
}
