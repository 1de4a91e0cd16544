//! Game tuning data
//!
//! Pool size, attempt budget, content catalog and the curated difficulty
//! curve. Loaded from JSON or taken from the built-in defaults, and always
//! validated before a session is built.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ATTEMPTS, POOL_SIZE};
use crate::error::ConfigError;
use crate::sim::{Catalog, Distribution, DistributionGenerator};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Jars per round
    pub pool_size: u32,
    /// Attempts per round
    pub max_attempts: u32,
    /// Content kinds in partition order
    pub catalog: Catalog,
    /// Hand-tuned counts for rounds 1..=N, each row in catalog order
    pub curated_rounds: Vec<Vec<u32>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            max_attempts: MAX_ATTEMPTS,
            catalog: Catalog::default(),
            curated_rounds: vec![
                vec![7, 7, 6],  // Balanced
                vec![10, 5, 5], // More worms
                vec![5, 10, 5], // More orange marmalade
                vec![5, 5, 10], // More lemon marmalade
                vec![15, 3, 2], // Very risky
            ],
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject any configuration the engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let kinds = self.catalog.len();
        if kinds == 0 {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen = std::collections::HashSet::new();
        for (_, kind) in self.catalog.iter() {
            if !seen.insert(kind.name.as_str()) {
                return Err(ConfigError::DuplicateKind(kind.name.clone()));
            }
        }

        if (self.pool_size as usize) < kinds {
            return Err(ConfigError::PoolTooSmall {
                pool_size: self.pool_size,
                kinds,
            });
        }

        if self.max_attempts == 0 || self.max_attempts > self.pool_size {
            return Err(ConfigError::AttemptsOutOfRange {
                max_attempts: self.max_attempts,
                pool_size: self.pool_size,
            });
        }

        for (i, row) in self.curated_rounds.iter().enumerate() {
            let round = i as u32 + 1;
            if row.len() != kinds {
                return Err(ConfigError::CuratedKindCount {
                    round,
                    expected: kinds,
                    actual: row.len(),
                });
            }
            let sum: u64 = row.iter().map(|&c| u64::from(c)).sum();
            if sum != u64::from(self.pool_size) {
                return Err(ConfigError::CuratedSumMismatch {
                    round,
                    expected: self.pool_size,
                    actual: sum,
                });
            }
        }

        Ok(())
    }

    /// Distribution generator for this config. Call `validate` first.
    pub fn generator(&self) -> DistributionGenerator {
        let curated = self
            .curated_rounds
            .iter()
            .map(|row| Distribution::new(row.clone()))
            .collect();
        DistributionGenerator::new(self.pool_size, self.catalog.len(), curated)
    }
}
