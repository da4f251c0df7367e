//! Immutable result surface for a completed join run.
//!
//! The engine constructs a `JoinStats` exactly once, after the run has
//! fully succeeded. A failed or aborted run surfaces an error instead;
//! stats are never partially populated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub Uuid);

/// Which phase a task report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Map,
    Reduce,
}

/// Per-task accounting: one per map task (one per relation) and one per
/// reduce task (one per partition).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    pub stage: Stage,
    pub task: TaskId,
    pub records_in: u64,
    pub records_out: u64,
    pub duration_ms: u64,
}

/// Run-wide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinCounters {
    pub map_input_records: u64,
    pub map_output_records: u64,
    pub reduce_input_records: u64,
    pub reduce_input_groups: u64,
    pub output_records: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinStats {
    pub id: RunId,

    /// Engine version string for provenance.
    pub engine_version: String,

    /// Milliseconds since Unix epoch (UTC).
    pub started_ms: u64,
    pub finished_ms: u64,

    pub counters: JoinCounters,
    pub map_tasks: Vec<TaskReport>,
    pub reduce_tasks: Vec<TaskReport>,
}

impl JoinStats {
    pub fn new(
        started_ms: u64,
        finished_ms: u64,
        counters: JoinCounters,
        map_tasks: Vec<TaskReport>,
        reduce_tasks: Vec<TaskReport>,
    ) -> Self {
        Self {
            id: RunId(Uuid::new_v4()),
            engine_version: crate::VERSION.to_string(),
            started_ms,
            finished_ms,
            counters,
            map_tasks,
            reduce_tasks,
        }
    }

    /// Wall-clock duration of the run.
    pub fn duration_ms(&self) -> u64 {
        self.finished_ms.saturating_sub(self.started_ms)
    }
}
