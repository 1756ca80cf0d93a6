//! Effects run by the session controller against [`GameEnv`].
//!
//! Each function builds a fresh boxed effect; nothing happens until the
//! controller runs it with `.run(&env).await`.

use crate::core::{daily_marker, TriviaSet};
use crate::effects::env::GameEnv;
use crate::effects::error::SessionError;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Resolve a challenge from the static catalog, falling back to its first set.
pub fn lookup_challenge(id: u32) -> BoxedEffect<TriviaSet, SessionError, GameEnv> {
    from_fn(move |env: &GameEnv| -> Result<TriviaSet, SessionError> {
        Ok(env.catalog().lookup(id).clone())
    })
    .boxed()
}

/// Whether the stored marker under `key` equals today's marker.
pub fn daily_done(key: String) -> BoxedEffect<bool, SessionError, GameEnv> {
    from_fn(move |env: &GameEnv| -> Result<bool, SessionError> {
        let today = daily_marker(env.today());
        let stored = env.markers().get(&key)?;
        Ok(stored.as_deref() == Some(today.as_str()))
    })
    .boxed()
}

/// Write today's marker under `key`, returning the value written.
pub fn mark_daily_done(key: String) -> BoxedEffect<String, SessionError, GameEnv> {
    from_fn(move |env: &GameEnv| -> Result<String, SessionError> {
        let today = daily_marker(env.today());
        env.markers().set(&key, &today)?;
        Ok(today)
    })
    .boxed()
}
