//! Load tickets.
//!
//! Each load request gets a ticket carrying a monotonically increasing
//! token. Only the ticket issued last may complete; a resolution arriving
//! with an older ticket is discarded.

use crate::core::TriviaSet;
use crate::effects::{lookup_challenge, GameEnv};
use serde::{Deserialize, Serialize};
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::warn;

/// Handle for one in-flight challenge load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadTicket {
    token: u64,
    challenge_id: u32,
}

impl LoadTicket {
    pub(crate) fn new(token: u64, challenge_id: u32) -> Self {
        Self {
            token,
            challenge_id,
        }
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// Identifier the load was requested for.
    pub fn challenge_id(&self) -> u32 {
        self.challenge_id
    }

    /// Wait for the pacer, then resolve the set from the static catalog.
    ///
    /// Borrows only the environment, so a caller may resolve several tickets
    /// concurrently and hand each result to
    /// [`SessionController::complete_load`](crate::session::SessionController::complete_load).
    pub async fn resolve(&self, env: &GameEnv) -> TriviaSet {
        env.pacer().pause().await;
        match lookup_challenge(self.challenge_id).run(env).await {
            Ok(set) => set,
            Err(error) => {
                warn!(%error, challenge_id = self.challenge_id, "catalog lookup failed");
                env.catalog().lookup(self.challenge_id).clone()
            }
        }
    }
}
