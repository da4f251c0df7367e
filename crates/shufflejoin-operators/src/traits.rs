//! Component traits + common error type.
//!
//! The exec runtime calls `map(...)` once per input record during the map
//! phase and `reduce(...)` once per distinct key during the reduce phase,
//! with the key group's records delivered in grouping order.

use shufflejoin_core::tuple::{JoinKey, JoinedPair, TaggedTuple, Tuple};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpError {
    #[error("join field {index} out of range for record with {width} fields")]
    KeyOutOfRange { index: usize, width: usize },

    #[error("execution error: {0}")]
    Exec(String),
}

/// Per-record transform applied to one relation before the shuffle.
///
/// Invariants:
/// - Implementations MUST be stateless across records: mapping the same
///   record twice produces structurally identical output.
/// - A malformed record is an error, never a silent skip; dropping it
///   would corrupt join completeness.
pub trait MapStage: Send + Sync + 'static {
    /// Human-readable component name (stable).
    fn name(&self) -> &'static str;

    /// Produce the shuffle key and tagged record for one input tuple.
    fn map(&self, tuple: Tuple) -> Result<(JoinKey, TaggedTuple), OpError>;
}

/// Per-key-group reducer.
///
/// `values` walks the group exactly once, in grouping order (every left
/// record before the first right record). Joined pairs go out through
/// `out`; the reducer itself performs no I/O.
pub trait Reducer: Send + Sync + 'static {
    /// Human-readable component name (stable).
    fn name(&self) -> &'static str;

    /// Consume one ordered key group.
    fn reduce(
        &self,
        key: &JoinKey,
        values: &mut dyn Iterator<Item = TaggedTuple>,
        out: &mut dyn FnMut(JoinedPair),
    ) -> Result<(), OpError>;
}
