//! Capabilities the game consumes and the environment bundling them.
//!
//! Every outside dependency of the session controller is a trait object
//! carried by [`GameEnv`]. Effects read what they need from the environment
//! when they run, so tests swap in fakes without touching the controller.

use crate::builder::GameEnvBuilder;
use crate::catalog::Catalog;
use crate::effects::error::{GenerationError, StoreError};
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Source of the player's local calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local time zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Durable string key-value accessor for the daily marker.
pub trait MarkerStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Remote content generator.
///
/// Returns the raw JSON payload for a topic; parsing and validation happen
/// in [`crate::effects::parse_generated`].
#[async_trait]
pub trait ChallengeGenerator: Send + Sync {
    async fn generate(&self, topic: &str) -> Result<String, GenerationError>;
}

/// Delay hook awaited before a load resolves.
///
/// Dropping the returned future cancels the pause.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Resolves loads immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self) {}
}

/// Sleeps on the tokio timer before each load resolves.
#[derive(Clone, Copy, Debug)]
pub struct SleepPacer {
    delay: Duration,
}

impl SleepPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Pacer for SleepPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

/// Environment handed to every effect the controller runs.
#[derive(Clone)]
pub struct GameEnv {
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) markers: Arc<dyn MarkerStore>,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) generator: Option<Arc<dyn ChallengeGenerator>>,
    pub(crate) pacer: Arc<dyn Pacer>,
}

impl GameEnv {
    pub fn builder() -> GameEnvBuilder {
        GameEnvBuilder::new()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn markers(&self) -> &dyn MarkerStore {
        self.markers.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn generator(&self) -> Option<&dyn ChallengeGenerator> {
        self.generator.as_deref()
    }

    pub fn pacer(&self) -> &dyn Pacer {
        self.pacer.as_ref()
    }
}

impl fmt::Debug for GameEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEnv")
            .field("today", &self.today())
            .field("catalog_size", &self.catalog.size())
            .field("generator", &self.generator.is_some())
            .finish_non_exhaustive()
    }
}
