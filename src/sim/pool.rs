//! Jar pool construction

use serde::{Deserialize, Serialize};

use super::catalog::KindId;
use super::distribution::Distribution;
use super::rng::RandomSource;

/// A single jar in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jar {
    /// Unique within the round only
    pub id: u32,
    pub kind: KindId,
    pub opened: bool,
}

/// Expand a distribution into `pool_size` jars and shuffle them.
///
/// Jar `i` gets the kind whose cumulative range covers `i`, then the whole
/// sequence is permuted so ids say nothing about contents.
///
/// Panics if the distribution does not cover exactly `pool_size` jars; the
/// generator never produces such a distribution.
pub fn build_pool(dist: &Distribution, pool_size: u32, rng: &mut impl RandomSource) -> Vec<Jar> {
    assert_eq!(
        dist.total(),
        u64::from(pool_size),
        "distribution does not fill the pool"
    );

    let mut jars: Vec<Jar> = (0..pool_size)
        .filter_map(|id| {
            dist.kind_at(id).map(|kind| Jar {
                id,
                kind,
                opened: false,
            })
        })
        .collect();

    shuffle(&mut jars, rng);
    jars
}

/// In-place Fisher-Yates, walking backward from the last element
pub fn shuffle<T>(items: &mut [T], rng: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}
