//! Per-round jar content distributions
//!
//! Early rounds follow a hand-tuned difficulty curve. Once the curated table
//! runs out, every round gets a random partition of the pool in which each
//! kind appears at least once.

use serde::{Deserialize, Serialize};

use super::catalog::KindId;
use super::rng::RandomSource;

/// Jar count per content kind, in catalog order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: Vec<u32>,
}

impl Distribution {
    pub fn new(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn kind_count(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Kind owning pool index `index` under cumulative-range lookup
    pub fn kind_at(&self, index: u32) -> Option<KindId> {
        let mut upper = 0u64;
        for (i, &count) in self.counts.iter().enumerate() {
            upper += u64::from(count);
            if u64::from(index) < upper {
                return Some(KindId(i));
            }
        }
        None
    }
}

/// Produces the distribution for any round number.
///
/// Built from validated configuration, so curated rows are known to fill the
/// pool exactly.
#[derive(Debug, Clone)]
pub struct DistributionGenerator {
    pool_size: u32,
    kind_count: usize,
    curated: Vec<Distribution>,
}

impl DistributionGenerator {
    pub fn new(pool_size: u32, kind_count: usize, curated: Vec<Distribution>) -> Self {
        Self {
            pool_size,
            kind_count,
            curated,
        }
    }

    /// Distribution for a 1-based round number. Round 0 is treated as round 1.
    pub fn generate(&self, round: u32, rng: &mut impl RandomSource) -> Distribution {
        let index = round.max(1) as usize - 1;
        let dist = match self.curated.get(index) {
            Some(curated) => curated.clone(),
            None => random_partition(self.pool_size, self.kind_count, rng),
        };
        debug_assert_eq!(dist.total(), u64::from(self.pool_size));
        dist
    }
}

/// Split `pool_size` jars across `kind_count` kinds, each getting at least one.
///
/// Kinds are filled in order. Each kind but the last takes a random share of
/// what remains, leaving one jar for every kind still to come; the last kind
/// absorbs the remainder. Requires `pool_size >= kind_count`.
pub fn random_partition(
    pool_size: u32,
    kind_count: usize,
    rng: &mut impl RandomSource,
) -> Distribution {
    if kind_count == 0 {
        return Distribution::new(Vec::new());
    }
    debug_assert!(pool_size as usize >= kind_count);

    let mut counts = Vec::with_capacity(kind_count);
    let mut remaining = pool_size;
    for i in 0..kind_count - 1 {
        let after = (kind_count - 1 - i) as u32;
        // Largest share that still leaves one jar per later kind
        let max_share = remaining.saturating_sub(after).max(1);
        let count = rng.below(max_share) + 1;
        counts.push(count);
        remaining = remaining.saturating_sub(count);
    }
    counts.push(remaining);

    Distribution::new(counts)
}
