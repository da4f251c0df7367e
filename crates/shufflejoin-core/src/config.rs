//! Join run configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable configuration for one join run.
///
/// Key indices are `usize`, so a negative index is unrepresentable; the
/// CLI turns a negative argument into a parse error before a config is
/// ever constructed. The partition count is validated here, before any
/// execution begins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinConfig {
    /// First (left) input location.
    pub input_left: String,

    /// Zero-based join field index in the left relation.
    pub key_index_left: usize,

    /// Second (right) input location.
    pub input_right: String,

    /// Zero-based join field index in the right relation.
    pub key_index_right: usize,

    /// Output directory; each partition writes its own shard under it.
    pub output: String,

    /// Number of partitions (reduce tasks). Must be at least 1.
    pub partitions: usize,
}

impl JoinConfig {
    pub fn new(
        input_left: impl Into<String>,
        key_index_left: usize,
        input_right: impl Into<String>,
        key_index_right: usize,
        output: impl Into<String>,
        partitions: usize,
    ) -> Result<Self> {
        if partitions < 1 {
            return Err(Error::Config(format!(
                "partition count must be at least 1, got {partitions}"
            )));
        }
        Ok(Self {
            input_left: input_left.into(),
            key_index_left,
            input_right: input_right.into(),
            key_index_right,
            output: output.into(),
            partitions,
        })
    }

    /// Partition-count default from the environment, if set and valid.
    ///
    /// Environment variable: `SHUFFLEJOIN_PARTITIONS`.
    pub fn env_partitions() -> Option<usize> {
        std::env::var("SHUFFLEJOIN_PARTITIONS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&v| v >= 1)
    }
}
