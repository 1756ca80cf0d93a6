//! Game configuration.

use crate::effects::{NoDelay, Pacer, SleepPacer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Tunables for a game session. Every field has a default, so a partial
/// JSON document is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Key of the "last completed day" marker.
    pub marker_key: String,
    /// Pause before a load resolves; 0 disables it.
    pub loading_delay_ms: u64,
    /// Upper bound on a content generator call.
    pub generation_timeout_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            marker_key: "last_daily_done".to_string(),
            loading_delay_ms: 800,
            generation_timeout_ms: 10_000,
        }
    }
}

impl GameConfig {
    /// Configuration with no loading pause, for tests and headless use.
    pub fn instant() -> Self {
        Self {
            loading_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_millis(self.generation_timeout_ms)
    }

    /// Delay hook matching `loading_delay_ms`.
    pub fn pacer(&self) -> Arc<dyn Pacer> {
        match self.loading_delay() {
            delay if delay.is_zero() => Arc::new(NoDelay),
            delay => Arc::new(SleepPacer::new(delay)),
        }
    }
}
