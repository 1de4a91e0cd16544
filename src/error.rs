//! Error types for configuration and storage.

use thiserror::Error;

/// Invalid game configuration. Always fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog has no content kinds.
    #[error("catalog must contain at least one content kind")]
    EmptyCatalog,

    /// Two kinds share a name.
    #[error("duplicate content kind name: {0}")]
    DuplicateKind(String),

    /// The pool cannot give every kind at least one jar.
    #[error("pool size {pool_size} is smaller than the number of content kinds ({kinds})")]
    PoolTooSmall { pool_size: u32, kinds: usize },

    /// Attempt budget is zero or larger than the pool.
    #[error("max attempts {max_attempts} must be between 1 and the pool size ({pool_size})")]
    AttemptsOutOfRange { max_attempts: u32, pool_size: u32 },

    /// A curated round lists the wrong number of kinds.
    #[error("curated round {round} has {actual} counts, catalog has {expected} kinds")]
    CuratedKindCount {
        round: u32,
        expected: usize,
        actual: usize,
    },

    /// A curated round does not fill the pool exactly.
    #[error("curated round {round} sums to {actual}, expected pool size {expected}")]
    CuratedSumMismatch { round: u32, expected: u32, actual: u64 },

    /// Config file could not be parsed.
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be read.
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value store failure. Recovered locally by callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing storage is not available in this environment.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Storage refused the write (quota exceeded, private mode, ...).
    #[error("storage rejected write: {0}")]
    Rejected(String),

    /// File I/O error.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document is not valid JSON.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
