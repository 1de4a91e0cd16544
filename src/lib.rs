//! Jar Game - open jars, dodge the worms, chase the high score
//!
//! Core modules:
//! - `sim`: Deterministic round/session engine (distribution, jar pool, state machine)
//! - `highscores`: Best score tracking on top of a key-value store
//! - `persistence`: Key-value stores (memory, JSON file, LocalStorage)
//! - `config`: Game tuning data with fail-fast validation
//! - `platform`: Browser facade for a JavaScript front end

pub mod config;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use highscores::HighScoreTracker;
pub use persistence::{KeyValueStore, MemoryStore};
pub use sim::{GameEvent, GameSession, OpenOutcome, RoundPhase, SessionState};

/// Game configuration constants
pub mod consts {
    /// Jars per round
    pub const POOL_SIZE: u32 = 20;
    /// Attempts per round
    pub const MAX_ATTEMPTS: u32 = 10;
    /// Storage key for the best score. Matches the key the browser game has always used.
    pub const HIGH_SCORE_KEY: &str = "jarGameHighScore";
}
