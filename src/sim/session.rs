//! Round/session state machine
//!
//! `GameSession` owns the state and is its only writer. Front ends drive it
//! with `open_jar` / `advance_round`, read it through `state()`, and can
//! subscribe to events instead of polling.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::catalog::Catalog;
use super::distribution::DistributionGenerator;
use super::pool::build_pool;
use super::rng::{RandomSource, SessionRng};
use super::state::{GameEvent, OpenOutcome, RoundPhase, SessionState};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::highscores::HighScoreTracker;
use crate::persistence::{KeyValueStore, MemoryStore};

type Observer = Box<dyn FnMut(&GameEvent)>;

/// Buffered events, read after the engine call that produced them returns.
///
/// For callers that cannot re-enter the session from inside an observer
/// (the browser facade holds a mutable borrow for the whole call).
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Rc<RefCell<VecDeque<GameEvent>>>,
}

impl EventQueue {
    /// Take every buffered event, oldest first
    pub fn drain(&self) -> Vec<GameEvent> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

/// One running game
pub struct GameSession<S = MemoryStore, R = SessionRng> {
    config: GameConfig,
    generator: DistributionGenerator,
    state: SessionState,
    high_scores: HighScoreTracker<S>,
    rng: R,
    observers: Vec<Observer>,
}

impl<S: KeyValueStore, R: RandomSource> GameSession<S, R> {
    /// Validate the config, load the high score and deal round 1
    pub fn new(config: GameConfig, store: S, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let generator = config.generator();
        let high_scores = HighScoreTracker::load(store);
        let high_score = high_scores.best();

        let distribution = generator.generate(1, &mut rng);
        let jars = build_pool(&distribution, config.pool_size, &mut rng);
        log::info!("Round 1 distribution: {:?}", distribution.counts());

        let state = SessionState {
            score: 0,
            attempts_remaining: config.max_attempts,
            round: 1,
            jars,
            high_score,
            phase: RoundPhase::AwaitingInput,
        };

        Ok(Self {
            config,
            generator,
            state,
            high_scores,
            rng,
            observers: Vec::new(),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Owned copy of the current state
    pub fn snapshot(&self) -> SessionState {
        self.state.clone()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.config.catalog
    }

    pub fn high_scores(&self) -> &HighScoreTracker<S> {
        &self.high_scores
    }

    /// Register an event callback. Callbacks run synchronously, in
    /// registration order, before the triggering call returns.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Subscribe a buffer instead of a callback
    pub fn event_queue(&mut self) -> EventQueue {
        let queue = EventQueue::default();
        let pending = Rc::clone(&queue.pending);
        self.subscribe(move |event| pending.borrow_mut().push_back(event.clone()));
        queue
    }

    /// Open a jar.
    ///
    /// Returns `None` without touching state when the round is over, no
    /// attempts are left, or the jar is missing or already open. Those cases
    /// are UI races (double clicks, stale views), not errors.
    pub fn open_jar(&mut self, jar_id: u32) -> Option<OpenOutcome> {
        if !self.state.accepts_opens() {
            log::debug!("Ignoring open of jar {}: round {} is over", jar_id, self.state.round);
            return None;
        }

        let Some(jar) = self.state.jars.iter_mut().find(|j| j.id == jar_id) else {
            log::debug!("Ignoring open of unknown jar {}", jar_id);
            return None;
        };
        if jar.opened {
            log::debug!("Ignoring open of jar {}: already open", jar_id);
            return None;
        }

        jar.opened = true;
        let kind = self.config.catalog[jar.kind].clone();

        let previous_high = self.state.high_score;
        self.state.score = self.state.score.saturating_add(kind.points);
        self.state.attempts_remaining -= 1;
        self.state.phase = RoundPhase::RoundInProgress;
        self.check_high_score();

        self.emit(GameEvent::JarOpened {
            jar_id,
            kind: kind.clone(),
        });

        let round_completed = self.state.attempts_remaining == 0;
        if round_completed {
            self.complete_round(previous_high);
        }

        Some(OpenOutcome {
            jar_id,
            kind,
            score: self.state.score,
            attempts_remaining: self.state.attempts_remaining,
            round_completed,
        })
    }

    /// Deal the next round. Ignored (returns `None`) unless the current round
    /// is complete.
    pub fn advance_round(&mut self) -> Option<SessionState> {
        if self.state.phase != RoundPhase::RoundComplete {
            log::warn!(
                "Ignoring advance from round {} in phase {:?}",
                self.state.round,
                self.state.phase
            );
            return None;
        }

        let round = self.state.round.saturating_add(1);
        let distribution = self.generator.generate(round, &mut self.rng);
        let jars = build_pool(&distribution, self.config.pool_size, &mut self.rng);
        log::info!("Round {} distribution: {:?}", round, distribution.counts());

        self.state.round = round;
        self.state.attempts_remaining = self.config.max_attempts;
        self.state.jars = jars;
        self.state.phase = RoundPhase::AwaitingInput;

        self.emit(GameEvent::RoundStarted { round });
        Some(self.snapshot())
    }

    fn check_high_score(&mut self) {
        if self.high_scores.submit(self.state.score) {
            self.state.high_score = self.high_scores.best();
        }
    }

    /// `previous_high` is the best score before the round's last open
    fn complete_round(&mut self, previous_high: i64) {
        self.state.phase = RoundPhase::RoundComplete;
        let final_score = self.state.score;
        let new_high_score = final_score > previous_high;
        log::info!(
            "Round {} complete: score {}{}",
            self.state.round,
            final_score,
            if new_high_score { " (new high score)" } else { "" }
        );
        self.emit(GameEvent::RoundCompleted {
            round: self.state.round,
            final_score,
            new_high_score,
        });
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

impl<S, R> std::fmt::Debug for GameSession<S, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
