//! Jar Game entry point
//!
//! Native builds get a terminal driver: play interactively from stdin or let
//! `--autoplay` open jars at random. The browser build uses `platform::web`.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    use clap::Parser;

    use jar_game::GameConfig;
    use jar_game::persistence::FileStore;
    use jar_game::sim::{GameEvent, GameSession, RandomSource, SessionRng};

    type Session = GameSession<FileStore, SessionRng>;

    #[derive(Parser, Debug)]
    #[command(name = "jar-game", version, about = "Open jars, dodge the worms")]
    pub struct Cli {
        /// Seed for a reproducible game (random if omitted)
        #[arg(long)]
        pub seed: Option<u64>,
        /// JSON config file (built-in defaults if omitted)
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// File holding the high score
        #[arg(long, default_value = "jar_game_scores.json")]
        pub store: PathBuf,
        /// Play this many rounds automatically instead of reading commands
        #[arg(long)]
        pub autoplay: Option<u32>,
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::parse();

        let config = match &cli.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        let rng = match cli.seed {
            Some(seed) => SessionRng::from_seed(seed),
            None => SessionRng::from_entropy(),
        };
        let seed = rng.seed();
        log::info!("Seed: {}", seed);

        let mut game = GameSession::new(config, FileStore::new(&cli.store), rng)?;
        game.subscribe(|event| match event {
            GameEvent::JarOpened { jar_id, kind } => {
                let sign = if kind.is_hazard() { "" } else { "+" };
                println!("Jar {}: {} ({}{} points)", jar_id, kind.name, sign, kind.points);
            }
            GameEvent::RoundCompleted {
                round,
                final_score,
                new_high_score,
            } => {
                println!("Round {} complete! Your score: {}", round, final_score);
                if *new_high_score {
                    println!("New high score: {}!", final_score);
                }
            }
            GameEvent::RoundStarted { round } => println!("--- Round {} ---", round),
        });

        match cli.autoplay {
            Some(rounds) => autoplay(&mut game, rounds, seed),
            None => interactive(&mut game)?,
        }

        if !game.high_scores().is_durable() {
            log::warn!(
                "High score could not be saved to {}",
                game.high_scores().store().path().display()
            );
        }
        Ok(())
    }

    fn autoplay(game: &mut Session, rounds: u32, seed: u64) {
        // Picks come from their own stream so the deal stays reproducible
        let mut picker = SessionRng::from_seed(seed.wrapping_add(1));
        for _ in 0..rounds {
            while game.state().accepts_opens() {
                let unopened: Vec<u32> = game.state().unopened().map(|j| j.id).collect();
                let pick = unopened[picker.below(unopened.len() as u32) as usize];
                game.open_jar(pick);
            }
            game.advance_round();
        }
        let state = game.state();
        log::info!(
            "Autoplay finished after {} rounds: score {}, high score {}",
            rounds,
            state.score,
            state.high_score
        );
        println!("Final score: {}  High score: {}", state.score, state.high_score);
    }

    fn interactive(game: &mut Session) -> io::Result<()> {
        print_help();
        print_state(game);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("open" | "o"), Some(id)) => match id.parse::<u32>() {
                    Ok(id) => {
                        if let Some(outcome) = game.open_jar(id) {
                            println!(
                                "Score: {}  Attempts left: {}",
                                outcome.score, outcome.attempts_remaining
                            );
                            if outcome.round_completed {
                                println!("Type `next` for the next round.");
                            }
                        } else {
                            println!("Jar {} can't be opened right now.", id);
                        }
                    }
                    Err(_) => println!("Not a jar number: {}", id),
                },
                (Some("next" | "n"), _) => {
                    if game.advance_round().is_some() {
                        print_state(game);
                    } else {
                        println!("Finish the round first.");
                    }
                }
                (Some("state" | "s"), _) => print_state(game),
                (Some("quit" | "q"), _) => break,
                (None, _) => {}
                _ => print_help(),
            }
            stdout.flush()?;
        }
        Ok(())
    }

    fn print_help() {
        println!("Commands: open <id> | next | state | quit");
    }

    fn print_state(game: &Session) {
        let state = game.state();
        println!(
            "Round {}  Score {}  Attempts {}  High score {}",
            state.round, state.score, state.attempts_remaining, state.high_score
        );
        let row: Vec<String> = state
            .jars
            .iter()
            .map(|jar| {
                if jar.opened {
                    format!("[{:>2}:{}]", jar.id, game.catalog()[jar.kind].name)
                } else {
                    format!("[{:>2}]", jar.id)
                }
            })
            .collect();
        for chunk in row.chunks(5) {
            println!("{}", chunk.join(" "));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Jar Game (native) starting...");

    if let Err(e) = terminal::run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
