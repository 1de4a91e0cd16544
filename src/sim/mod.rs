//! Deterministic round/session engine
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Randomness only through an injected `RandomSource`
//! - Stable kind order (catalog order) for partitioning and pool expansion
//! - No rendering, audio or platform dependencies

pub mod catalog;
pub mod distribution;
pub mod pool;
pub mod rng;
pub mod session;
pub mod state;

pub use catalog::{Catalog, ContentKind, KindId};
pub use distribution::{Distribution, DistributionGenerator, random_partition};
pub use pool::{Jar, build_pool, shuffle};
pub use rng::{RandomSource, ScriptedRandom, SessionRng};
pub use session::{EventQueue, GameSession};
pub use state::{GameEvent, OpenOutcome, RoundPhase, SessionState};
