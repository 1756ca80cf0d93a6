//! Session controller: the game's state machine.
//!
//! ```text
//! initialize ──(marker == today)──▶ START ──review_today / play_next──┐
//!     │                                                             │
//!     └──────────────▶ LOADING ◀───────────────────────────────────┘
//!                         │ load resolves                  ▲
//!                         ▼                                │ play_next
//!                      PLAYING ──last guess──▶ SUMMARY ────┘
//! ```
//!
//! Events arriving in a phase that does not accept them are ignored. Store
//! and generator failures are logged and recovered from, so the controller
//! always rests in a valid phase.

use crate::config::GameConfig;
use crate::core::{
    next_challenge_id, todays_challenge_id, GamePhase, Guess, PhaseChange, PhaseGuards,
    PhaseHistory, ResultLog, State, TriviaItem, TriviaSet, UserResult, Verdict,
};
use crate::effects::{
    daily_done, default_topic, fetch_generated, mark_daily_done, GameEnv,
    GENERATED_CHALLENGE_ID,
};
use crate::session::snapshot::{SessionSnapshot, Summary, SNAPSHOT_VERSION};
use crate::session::ticket::LoadTicket;
use chrono::Utc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One play-through of a challenge set. Discarded on the next load.
#[derive(Clone, Debug)]
struct Session {
    id: Uuid,
    challenge_id: u32,
    trivia: TriviaSet,
    index: usize,
    results: ResultLog,
}

impl Session {
    fn fresh(challenge_id: u32, trivia: TriviaSet) -> Self {
        Self {
            id: Uuid::new_v4(),
            challenge_id,
            trivia,
            index: 0,
            results: ResultLog::new(),
        }
    }

    fn current_item(&self) -> Option<&TriviaItem> {
        self.trivia.item(self.index)
    }
}

/// Owns the phase machine, the active session and the daily gate.
pub struct SessionController {
    env: GameEnv,
    config: GameConfig,
    guards: PhaseGuards,
    phase: GamePhase,
    active_challenge_id: u32,
    session: Option<Session>,
    history: PhaseHistory<GamePhase>,
    last_token: u64,
    pending: Option<LoadTicket>,
}

impl SessionController {
    /// Create a controller and apply the daily gate.
    ///
    /// When the stored marker equals today's date the controller rests in
    /// START; otherwise it loads today's challenge and ends up PLAYING. A
    /// failed marker read counts as "not played today".
    pub async fn initialize(env: GameEnv, config: GameConfig) -> Self {
        let today_id = todays_challenge_id(env.today(), env.catalog().size());
        let mut controller = Self {
            env,
            config,
            guards: PhaseGuards::default(),
            phase: GamePhase::Loading,
            active_challenge_id: today_id,
            session: None,
            history: PhaseHistory::new(),
            last_token: 0,
            pending: None,
        };

        let done_today = match daily_done(controller.config.marker_key.clone())
            .run(&controller.env)
            .await
        {
            Ok(done) => done,
            Err(error) => {
                warn!(%error, "daily marker unreadable, treating today as not played");
                false
            }
        };

        if done_today {
            info!(challenge_id = today_id, "today's challenge already completed");
            controller.enter(GamePhase::Start);
        } else {
            controller.load_challenge(today_id).await;
        }
        controller
    }

    /// Today's challenge identifier, from the environment's clock.
    pub fn todays_challenge_id(&self) -> u32 {
        todays_challenge_id(self.env.today(), self.env.catalog().size())
    }

    /// Enter LOADING for `challenge_id` and issue a ticket superseding any
    /// earlier one.
    pub fn begin_load(&mut self, challenge_id: u32) -> LoadTicket {
        self.last_token += 1;
        let ticket = LoadTicket::new(self.last_token, challenge_id);
        self.pending = Some(ticket);
        self.enter(GamePhase::Loading);
        debug!(token = ticket.token(), challenge_id, "load requested");
        ticket
    }

    /// Install a resolved set and start playing it.
    ///
    /// Returns `false` and changes nothing when `ticket` is not the most
    /// recently issued one.
    pub fn complete_load(&mut self, ticket: LoadTicket, trivia: TriviaSet) -> bool {
        self.settle(ticket, ticket.challenge_id(), trivia)
    }

    fn settle(&mut self, ticket: LoadTicket, challenge_id: u32, trivia: TriviaSet) -> bool {
        if self.pending != Some(ticket) {
            warn!(
                token = ticket.token(),
                latest = self.last_token,
                "discarding stale load resolution"
            );
            return false;
        }
        if trivia.is_empty() {
            warn!(challenge_id, "resolved set has no items, using catalog fallback");
            let fallback = self.env.catalog().lookup(challenge_id).clone();
            return self.settle(ticket, challenge_id, fallback);
        }

        self.pending = None;
        self.active_challenge_id = challenge_id;
        info!(
            challenge_id,
            topic = %trivia.topic,
            items = trivia.len(),
            "challenge loaded"
        );
        self.session = Some(Session::fresh(challenge_id, trivia));
        self.enter(GamePhase::Playing);
        true
    }

    /// Load a set from the static catalog and start playing it.
    ///
    /// Accepted from any phase. Unknown identifiers play the catalog's first
    /// set; the requested identifier is still recorded as active.
    pub async fn load_challenge(&mut self, challenge_id: u32) {
        let ticket = self.begin_load(challenge_id);
        let trivia = ticket.resolve(&self.env).await;
        self.complete_load(ticket, trivia);
    }

    /// Load a freshly generated set on `topic` (or the day's default topic).
    ///
    /// Any generator failure falls back to today's catalog challenge.
    pub async fn load_generated(&mut self, topic: Option<&str>) {
        let ticket = self.begin_load(GENERATED_CHALLENGE_ID);
        let topic = topic
            .map(str::to_string)
            .unwrap_or_else(|| default_topic(self.env.today()).to_string());

        let timeout = self.config.generation_timeout();
        match fetch_generated(&self.env, &topic, timeout).await {
            Ok(trivia) => {
                self.settle(ticket, GENERATED_CHALLENGE_ID, trivia);
            }
            Err(error) => {
                warn!(%error, %topic, "generation failed, falling back to catalog");
                let today_id = self.todays_challenge_id();
                let fallback = LoadTicket::new(ticket.token(), today_id)
                    .resolve(&self.env)
                    .await;
                self.settle(ticket, today_id, fallback);
            }
        }
    }

    /// Grade a guess for the current card.
    ///
    /// Ignored (returns `None`) outside PLAYING. After the last card the
    /// controller writes the daily marker when the set is today's challenge,
    /// then moves to SUMMARY even if that write fails.
    pub async fn submit_guess(&mut self, guess: Guess) -> Option<UserResult> {
        if !self.guards.submit_guess.check(&self.phase) {
            debug!(phase = self.phase.name(), %guess, "guess ignored");
            return None;
        }
        let today_id = self.todays_challenge_id();

        let (result, finished, challenge_id) = {
            let session = self.session.as_mut()?;
            let result = UserResult::grade(session.current_item()?, guess);
            session.results = session.results.record(result.clone());
            debug!(
                index = session.index,
                item = %result.item().name,
                %guess,
                correct = result.correct(),
                "guess graded"
            );

            let finished = session.index + 1 >= session.trivia.len();
            if !finished {
                session.index += 1;
            }
            (result, finished, session.challenge_id)
        };

        if finished {
            if challenge_id == today_id {
                match mark_daily_done(self.config.marker_key.clone())
                    .run(&self.env)
                    .await
                {
                    Ok(marker) => info!(%marker, "daily challenge completed"),
                    Err(error) => warn!(%error, "could not persist daily marker"),
                }
            }
            info!(challenge_id, score = self.score(), "session finished");
            self.enter(GamePhase::Summary);
        }
        Some(result)
    }

    /// Load the challenge after the active one. Accepted from START and
    /// SUMMARY; returns whether the request was accepted.
    pub async fn play_next(&mut self) -> bool {
        if !self.guards.play_next.check(&self.phase) {
            debug!(phase = self.phase.name(), "play_next ignored");
            return false;
        }
        let next = next_challenge_id(self.active_challenge_id, self.env.catalog().size());
        self.load_challenge(next).await;
        true
    }

    /// Replay today's challenge from scratch. Accepted from START only.
    pub async fn review_today(&mut self) -> bool {
        if !self.guards.review_today.check(&self.phase) {
            debug!(phase = self.phase.name(), "review_today ignored");
            return false;
        }
        let today_id = self.todays_challenge_id();
        self.load_challenge(today_id).await;
        true
    }

    fn enter(&mut self, phase: GamePhase) {
        if self.phase == phase {
            return;
        }
        debug!(from = self.phase.name(), to = phase.name(), "phase change");
        self.history = self.history.record(PhaseChange {
            from: self.phase,
            to: phase,
            timestamp: Utc::now(),
            load_token: self.last_token,
        });
        self.phase = phase;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn active_challenge_id(&self) -> u32 {
        self.active_challenge_id
    }

    /// Whether the active challenge is today's.
    pub fn is_daily(&self) -> bool {
        self.active_challenge_id == self.todays_challenge_id()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn trivia(&self) -> Option<&TriviaSet> {
        self.session.as_ref().map(|s| &s.trivia)
    }

    fn playing_session(&self) -> Option<&Session> {
        self.session
            .as_ref()
            .filter(|_| self.phase == GamePhase::Playing)
    }

    /// Card awaiting a guess (PLAYING only).
    pub fn current_item(&self) -> Option<&TriviaItem> {
        self.playing_session()?.current_item()
    }

    /// The current card and the one behind it, as stacked on screen.
    pub fn card_stack(&self) -> &[TriviaItem] {
        match self.playing_session() {
            Some(session) => {
                let items = &session.trivia.items;
                let end = (session.index + 2).min(items.len());
                &items[session.index..end]
            }
            None => &[],
        }
    }

    /// Zero-based position of the current card.
    pub fn index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.index)
    }

    /// Number of cards in the active set.
    pub fn total(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.trivia.len())
    }

    /// One-based `(position, total)` for the progress readout (PLAYING only).
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.playing_session().map(|s| (s.index + 1, s.trivia.len()))
    }

    pub fn score(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.results.score())
    }

    /// Full result log (SUMMARY only).
    pub fn results(&self) -> Option<&[UserResult]> {
        if self.phase != GamePhase::Summary {
            return None;
        }
        self.session.as_ref().map(|s| s.results.results())
    }

    pub fn summary(&self) -> Option<Summary> {
        let results = self.results()?;
        let total = self.total().unwrap_or(results.len());
        let score = self.score();
        Some(Summary {
            score,
            total,
            is_daily: self.is_daily(),
            verdict: Verdict::from_score(score, total),
        })
    }

    pub fn history(&self) -> &PhaseHistory<GamePhase> {
        &self.history
    }

    pub fn env(&self) -> &GameEnv {
        &self.env
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Capture the presentation surface.
    pub fn snapshot(&self) -> SessionSnapshot {
        let playing = self.phase == GamePhase::Playing;
        SessionSnapshot {
            version: SNAPSHOT_VERSION,
            taken_at: Utc::now(),
            phase: self.phase,
            session_id: self.session_id(),
            challenge_id: self.active_challenge_id,
            todays_challenge_id: self.todays_challenge_id(),
            topic: self.trivia().map(|t| t.topic.clone()),
            index: self.index().filter(|_| playing),
            total: self.total(),
            score: self.score(),
            current_item: self.current_item().cloned(),
            results: self.results().map(<[UserResult]>::to_vec).unwrap_or_default(),
            summary: self.summary(),
        }
    }
}
