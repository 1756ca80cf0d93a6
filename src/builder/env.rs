//! Builder for [`GameEnv`].

use crate::builder::error::BuildError;
use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::effects::{
    ChallengeGenerator, Clock, GameEnv, MarkerStore, NoDelay, Pacer, SystemClock,
};
use std::sync::Arc;

/// Builder for constructing a game environment with a fluent API.
///
/// # Example
///
/// ```
/// use daily_swipe::effects::{GameEnv, MemoryMarkerStore};
/// use std::sync::Arc;
///
/// let env = GameEnv::builder()
///     .markers(Arc::new(MemoryMarkerStore::new()))
///     .build()
///     .unwrap();
/// assert_eq!(env.catalog().size().get(), 30);
/// ```
#[derive(Default)]
pub struct GameEnvBuilder {
    clock: Option<Arc<dyn Clock>>,
    markers: Option<Arc<dyn MarkerStore>>,
    catalog: Option<Arc<Catalog>>,
    generator: Option<Arc<dyn ChallengeGenerator>>,
    pacer: Option<Arc<dyn Pacer>>,
}

impl GameEnvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date source. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Set the marker store (required).
    ///
    /// Takes an `Arc` so several environments can share one store.
    pub fn markers(mut self, store: Arc<dyn MarkerStore>) -> Self {
        self.markers = Some(store);
        self
    }

    /// Set the static catalog. Defaults to [`Catalog::bundled`].
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Attach a content generator (optional).
    pub fn generator(mut self, generator: impl ChallengeGenerator + 'static) -> Self {
        self.generator = Some(Arc::new(generator));
        self
    }

    /// Set the load delay hook. Defaults to [`NoDelay`].
    pub fn pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = Some(pacer);
        self
    }

    /// Take the load delay from configuration.
    pub fn configured(self, config: &GameConfig) -> Self {
        self.pacer(config.pacer())
    }

    /// Build the environment.
    /// Returns an error if the marker store is missing.
    pub fn build(self) -> Result<GameEnv, BuildError> {
        let markers = self.markers.ok_or(BuildError::MissingMarkerStore)?;

        Ok(GameEnv {
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            markers,
            catalog: self
                .catalog
                .unwrap_or_else(|| Arc::new(Catalog::bundled())),
            generator: self.generator,
            pacer: self.pacer.unwrap_or_else(|| Arc::new(NoDelay)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{FixedClock, MemoryMarkerStore};
    use chrono::NaiveDate;

    #[test]
    fn builder_requires_marker_store() {
        let result = GameEnvBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingMarkerStore)));
    }

    #[test]
    fn builder_applies_defaults() {
        let env = GameEnvBuilder::new()
            .markers(Arc::new(MemoryMarkerStore::new()))
            .build()
            .unwrap();

        assert_eq!(env.catalog().size().get(), 30);
        assert!(env.generator().is_none());
    }

    #[test]
    fn fluent_api_overrides_capabilities() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let catalog = Catalog::new(Catalog::bundled().sets()[..3].to_vec()).unwrap();

        let env = GameEnvBuilder::new()
            .clock(FixedClock(date))
            .markers(Arc::new(MemoryMarkerStore::new()))
            .catalog(catalog)
            .build()
            .unwrap();

        assert_eq!(env.today(), date);
        assert_eq!(env.catalog().size().get(), 3);
    }
}
