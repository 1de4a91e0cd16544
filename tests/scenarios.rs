//! End-to-end scenarios against the public session API

use std::cell::RefCell;
use std::rc::Rc;

use jar_game::consts::HIGH_SCORE_KEY;
use jar_game::persistence::FileStore;
use jar_game::sim::{Catalog, ContentKind, GameSession, KindId, ScriptedRandom, SessionRng};
use jar_game::{GameConfig, GameEvent, KeyValueStore, MemoryStore, RoundPhase, StoreError};

/// hazard -5, reward-low +5, reward-mid +10, reward-high +25
fn four_kind_config(max_attempts: u32, round_one: Vec<u32>) -> GameConfig {
    GameConfig {
        pool_size: 20,
        max_attempts,
        catalog: Catalog::new(vec![
            ContentKind::new("hazard", -5),
            ContentKind::new("reward-low", 5),
            ContentKind::new("reward-mid", 10),
            ContentKind::new("reward-high", 25),
        ]),
        curated_rounds: vec![round_one],
    }
}

fn jars_of(game: &GameSession, kind: KindId) -> Vec<u32> {
    game.state()
        .jars
        .iter()
        .filter(|j| j.kind == kind)
        .map(|j| j.id)
        .collect()
}

fn record_events(game: &mut GameSession) -> Rc<RefCell<Vec<GameEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    log
}

#[test]
fn ten_low_rewards_score_fifty() {
    let config = four_kind_config(10, vec![5, 10, 4, 1]);
    let mut game = GameSession::new(config, MemoryStore::new(), SessionRng::from_seed(21)).unwrap();
    let events = record_events(&mut game);

    let low = jars_of(&game, KindId(1));
    assert_eq!(low.len(), 10);

    for (n, id) in low.into_iter().enumerate() {
        let outcome = game.open_jar(id).unwrap();
        assert_eq!(outcome.kind.points, 5);
        assert_eq!(outcome.attempts_remaining, 9 - n as u32);
        assert_eq!(outcome.round_completed, n == 9);
    }

    assert_eq!(game.state().score, 50);
    assert_eq!(game.state().attempts_remaining, 0);
    assert_eq!(game.state().phase, RoundPhase::RoundComplete);
    assert_eq!(
        events.borrow().last(),
        Some(&GameEvent::RoundCompleted {
            round: 1,
            final_score: 50,
            new_high_score: true,
        })
    );
}

#[test]
fn curated_four_kind_round_one_deals_listed_counts() {
    let config = four_kind_config(10, vec![7, 7, 5, 1]);
    let game = GameSession::new(config, MemoryStore::new(), SessionRng::from_seed(4)).unwrap();
    let counts: Vec<usize> = (0..4).map(|k| jars_of(&game, KindId(k)).len()).collect();
    assert_eq!(counts, vec![7, 7, 5, 1]);
}

#[test]
fn fallback_round_six_with_four_kinds() {
    let config = four_kind_config(20, vec![7, 7, 5, 1]);
    let generator = config.generator();
    for value in [0.0, 0.25, 0.5, 0.75, 0.999_999] {
        let dist = generator.generate(6, &mut ScriptedRandom::constant(value));
        assert_eq!(dist.total(), 20);
        assert!(dist.counts().iter().all(|&c| c >= 1), "{value}: {dist:?}");
    }
}

#[test]
fn all_hazard_round_keeps_zero_high_score() {
    let config = four_kind_config(3, vec![7, 7, 5, 1]);
    let mut game = GameSession::new(config, MemoryStore::new(), SessionRng::from_seed(8)).unwrap();
    let events = record_events(&mut game);
    assert_eq!(game.state().high_score, 0);

    for id in jars_of(&game, KindId(0)).into_iter().take(3) {
        game.open_jar(id).unwrap();
    }

    assert_eq!(game.state().score, -15);
    assert_eq!(game.state().high_score, 0);
    assert_eq!(game.high_scores().store().get(HIGH_SCORE_KEY).unwrap(), None);
    assert_eq!(
        events.borrow().last(),
        Some(&GameEvent::RoundCompleted {
            round: 1,
            final_score: -15,
            new_high_score: false,
        })
    );
}

#[test]
fn new_high_score_ignores_old_half_score_rule() {
    // Prior best of 40: a round ending on 25 is not a new high score, even
    // though `score > best - score` (25 > 15) would claim it is.
    let store = MemoryStore::with_entry(HIGH_SCORE_KEY, "40");
    let config = four_kind_config(5, vec![7, 7, 5, 1]);
    let mut game = GameSession::new(config, store, SessionRng::from_seed(2)).unwrap();
    let events = record_events(&mut game);

    for id in jars_of(&game, KindId(1)).into_iter().take(5) {
        game.open_jar(id).unwrap();
    }
    assert_eq!(game.state().score, 25);
    assert_eq!(game.state().high_score, 40);
    assert!(matches!(
        events.borrow().last(),
        Some(GameEvent::RoundCompleted {
            new_high_score: false,
            ..
        })
    ));
}

#[test]
fn round_that_peaks_then_drops_is_not_a_new_high() {
    let mut game = GameSession::new(
        GameConfig::default(),
        MemoryStore::new(),
        SessionRng::from_seed(1),
    )
    .unwrap();
    let events = record_events(&mut game);

    let orange = jars_of(&game, KindId(1));
    let lemon = jars_of(&game, KindId(2));
    let worms = jars_of(&game, KindId(0));
    assert_eq!(orange.len(), 7);
    for id in orange.into_iter().chain(lemon.into_iter().take(2)) {
        game.open_jar(id).unwrap();
    }
    // 7 * 3 + 2 * 2
    assert_eq!(game.state().high_score, 25);

    game.open_jar(worms[0]).unwrap();
    assert_eq!(game.state().score, 20);
    assert_eq!(game.state().high_score, 25);
    assert_eq!(
        events.borrow().last(),
        Some(&GameEvent::RoundCompleted {
            round: 1,
            final_score: 20,
            new_high_score: false,
        })
    );
}

#[test]
fn whole_pool_budget_opens_every_jar() {
    let config = four_kind_config(20, vec![7, 7, 5, 1]);
    let mut game = GameSession::new(config, MemoryStore::new(), SessionRng::from_seed(13)).unwrap();
    let ids: Vec<u32> = game.state().jars.iter().map(|j| j.id).collect();
    for id in ids {
        game.open_jar(id).unwrap();
    }
    // 7 * -5 + 7 * 5 + 5 * 10 + 25
    assert_eq!(game.state().score, 75);
    assert_eq!(game.state().phase, RoundPhase::RoundComplete);
    assert!(game.state().jars.iter().all(|j| j.opened));
}

#[test]
fn rounds_past_the_table_keep_going() {
    let mut game = GameSession::new(
        GameConfig::default(),
        MemoryStore::new(),
        SessionRng::from_seed(77),
    )
    .unwrap();
    for round in 1..=12 {
        assert_eq!(game.state().round, round);
        let ids: Vec<u32> = game.state().jars.iter().map(|j| j.id).collect();
        for id in ids {
            game.open_jar(id);
        }
        assert!(game.state().is_round_complete());
        game.advance_round().unwrap();
    }
    assert_eq!(game.state().round, 13);
    assert_eq!(game.state().jars.len(), 20);
}

#[test]
fn same_seed_same_game() {
    let play = || {
        let mut game = GameSession::new(
            GameConfig::default(),
            MemoryStore::new(),
            SessionRng::from_seed(2024),
        )
        .unwrap();
        for _ in 0..8 {
            for id in 0..10 {
                game.open_jar(id);
            }
            game.advance_round();
        }
        game.snapshot()
    };
    assert_eq!(play(), play());
}

#[test]
fn high_score_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let best = {
        let mut game = GameSession::new(
            GameConfig::default(),
            FileStore::new(&path),
            SessionRng::from_seed(5),
        )
        .unwrap();
        let orange = game.catalog().find("orange-marmalade").unwrap();
        let ids: Vec<u32> = game
            .state()
            .jars
            .iter()
            .filter(|j| j.kind == orange)
            .map(|j| j.id)
            .collect();
        for id in ids {
            game.open_jar(id);
        }
        game.state().high_score
    };
    assert_eq!(best, 21);

    let game = GameSession::new(
        GameConfig::default(),
        FileStore::new(&path),
        SessionRng::from_seed(6),
    )
    .unwrap();
    assert_eq!(game.state().high_score, 21);
    assert_eq!(game.state().score, 0);
}

struct FullDisk;

impl KeyValueStore for FullDisk {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(Some("7".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected("quota exceeded".to_string()))
    }
}

#[test]
fn failing_store_does_not_interrupt_play() {
    let mut game =
        GameSession::new(GameConfig::default(), FullDisk, SessionRng::from_seed(10)).unwrap();
    assert_eq!(game.state().high_score, 7);

    let orange = KindId(1);
    let ids: Vec<u32> = game
        .state()
        .jars
        .iter()
        .filter(|j| j.kind == orange)
        .map(|j| j.id)
        .collect();
    for id in ids {
        game.open_jar(id).unwrap();
    }

    assert_eq!(game.state().score, 21);
    assert_eq!(game.state().high_score, 21);
    assert!(!game.high_scores().is_durable());
}
