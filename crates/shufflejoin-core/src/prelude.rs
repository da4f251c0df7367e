//! Convenient re-exports for downstream crates.

pub use crate::config::JoinConfig;
pub use crate::error::{Error, Result};
pub use crate::id::{PartitionId, TaskId};
pub use crate::order::{grouping_cmp, same_group};
pub use crate::partition::partition_for_key;
pub use crate::stats::{JoinCounters, JoinStats, RunId, Stage, TaskReport};
pub use crate::tuple::{JoinKey, JoinedPair, Side, TaggedTuple, Tuple};
