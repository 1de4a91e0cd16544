//! Session state and the values handed to front ends
//!
//! Everything here is plain data: serializable so a browser front end can take
//! snapshots as JSON, and only ever mutated by `GameSession`.

use serde::{Deserialize, Serialize};

use super::catalog::ContentKind;
use super::pool::Jar;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Fresh pool, nothing opened yet
    AwaitingInput,
    /// At least one jar opened, attempts left
    RoundInProgress,
    /// Attempts exhausted, waiting for the next round
    RoundComplete,
}

/// Complete session state (single writer: the engine)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Running score across rounds (may go negative)
    pub score: i64,
    pub attempts_remaining: u32,
    /// 1-based round number
    pub round: u32,
    /// Current pool in display order
    pub jars: Vec<Jar>,
    /// Best score ever seen, never decreases
    pub high_score: i64,
    pub phase: RoundPhase,
}

impl SessionState {
    pub fn jar(&self, id: u32) -> Option<&Jar> {
        self.jars.iter().find(|j| j.id == id)
    }

    pub fn unopened(&self) -> impl Iterator<Item = &Jar> {
        self.jars.iter().filter(|j| !j.opened)
    }

    pub fn is_round_complete(&self) -> bool {
        self.phase == RoundPhase::RoundComplete
    }

    /// Whether `open_jar` would currently do anything at all
    pub fn accepts_opens(&self) -> bool {
        self.attempts_remaining > 0 && self.phase != RoundPhase::RoundComplete
    }
}

/// Result of a successful jar open
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOutcome {
    pub jar_id: u32,
    pub kind: ContentKind,
    pub score: i64,
    pub attempts_remaining: u32,
    /// This open used the last attempt of the round
    pub round_completed: bool,
}

/// Events delivered to session observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    JarOpened {
        jar_id: u32,
        kind: ContentKind,
    },
    RoundCompleted {
        round: u32,
        final_score: i64,
        /// Final score beat the best score held when the round began
        new_high_score: bool,
    },
    RoundStarted {
        round: u32,
    },
}
