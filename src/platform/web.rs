//! JavaScript-facing facade
//!
//! Snapshots, outcomes and events cross the boundary as JSON strings so the
//! page can render them however it likes.
//!
//! Events are queued rather than pushed to JS callbacks: a handler called
//! from inside `open_jar` would run while `WebGame` is mutably borrowed, and
//! any call back into the game would fail. The page drains the queue with
//! `take_events_json` after each call.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::persistence::LocalStorageStore;
use crate::sim::{EventQueue, GameSession, SessionRng};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// A game session backed by LocalStorage
#[wasm_bindgen]
pub struct WebGame {
    session: GameSession<LocalStorageStore, SessionRng>,
    events: EventQueue,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a session with the built-in config, or a JSON config if given
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WebGame, JsValue> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(&json),
            None => Ok(GameConfig::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let rng = SessionRng::from_entropy();
        log::info!("Jar game starting with seed {}", rng.seed());
        let mut session = GameSession::new(config, LocalStorageStore::new(), rng)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let events = session.event_queue();
        Ok(WebGame { session, events })
    }

    /// Current state as JSON
    pub fn state_json(&self) -> String {
        to_json(self.session.state())
    }

    /// Catalog as JSON (jar kinds are catalog indices)
    pub fn catalog_json(&self) -> String {
        to_json(self.session.catalog())
    }

    /// Open a jar; `undefined` if the open was ignored
    pub fn open_jar(&mut self, jar_id: u32) -> Option<String> {
        self.session.open_jar(jar_id).map(|outcome| to_json(&outcome))
    }

    /// Next round snapshot; `undefined` if the round is not finished
    pub fn advance_round(&mut self) -> Option<String> {
        self.session.advance_round().map(|state| to_json(&state))
    }

    /// Events raised since the last call, oldest first, as a JSON array
    pub fn take_events_json(&self) -> String {
        to_json(&self.events.drain())
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::error!("Serialization failed: {}", e);
        "null".to_string()
    })
}
