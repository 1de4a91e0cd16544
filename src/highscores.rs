//! Best score tracking
//!
//! Persisted as a decimal string under `HIGH_SCORE_KEY`. Persistence is
//! best-effort: the first failed write switches the tracker to memory-only for
//! the rest of the run.

use crate::consts::HIGH_SCORE_KEY;
use crate::error::StoreError;
use crate::persistence::KeyValueStore;

/// Best score seen across sessions
#[derive(Debug)]
pub struct HighScoreTracker<S> {
    store: S,
    best: i64,
    durable: bool,
}

impl<S: KeyValueStore> HighScoreTracker<S> {
    /// Read the stored best score, defaulting to 0
    pub fn load(store: S) -> Self {
        let best = match store.get(HIGH_SCORE_KEY) {
            Ok(Some(raw)) => match parse_score(&raw) {
                Some(best) => {
                    log::info!("Loaded high score {}", best);
                    best
                }
                None => {
                    log::warn!("Ignoring unreadable high score {:?}", raw);
                    0
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read high score: {}", e);
                0
            }
        };

        Self {
            store,
            best,
            durable: true,
        }
    }

    pub fn best(&self) -> i64 {
        self.best
    }

    /// False once a write has failed this run
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write `value` to the store
    pub fn save(&mut self, value: i64) -> Result<(), StoreError> {
        self.store.set(HIGH_SCORE_KEY, &value.to_string())
    }

    /// Raise the best score if `score` beats it, persisting immediately.
    ///
    /// Returns true if the best score changed.
    pub fn submit(&mut self, score: i64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        log::info!("New high score: {}", score);

        if self.durable {
            if let Err(e) = self.save(score) {
                log::warn!("High score not persisted, keeping it in memory only: {}", e);
                self.durable = false;
            }
        }
        true
    }
}

/// Accepts integers and the float strings older saves may contain
fn parse_score(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v.trunc() as i64)
    })
}
