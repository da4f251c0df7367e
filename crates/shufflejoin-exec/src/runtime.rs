//! Runtime: execute a repartition join in-process and emit `JoinStats`.
//!
//! Phases:
//! - Map: both relations are read and tagged, and every record is routed
//!   to exactly one partition by the co-partition function. The reduce
//!   phase starts only after both map tasks finish (hard barrier).
//! - Sort: each partition is ordered by the grouping order, so same-key
//!   records are contiguous and left records precede right records.
//! - Reduce: partitions are independent; one scoped worker per partition,
//!   joined at a single point, each writing its own disjoint shard.
//!
//! Map and reduce components are pure and safely re-invocable; a run that
//! fails anywhere returns an error and never a partially populated stats
//! record.

use std::sync::Arc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use thiserror::Error;

use shufflejoin_core::config::JoinConfig;
use shufflejoin_core::id::{PartitionId, TaskId};
use shufflejoin_core::order::{grouping_cmp, same_group};
use shufflejoin_core::partition::partition_for_key;
use shufflejoin_core::stats::{JoinCounters, JoinStats, Stage, TaskReport};
use shufflejoin_core::tuple::{JoinKey, Side, TaggedTuple};

use shufflejoin_io::readers::csv::TupleReader;
use shufflejoin_io::writers::csv::create_shard;

use shufflejoin_operators::join::streaming::StreamingJoin;
use shufflejoin_operators::tag::TaggingMapper;
use shufflejoin_operators::traits::{MapStage, OpError, Reducer};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("map task {task} failed: {source}")]
    MapTask { task: &'static str, source: OpError },

    #[error("reduce task {partition} failed: {source}")]
    ReduceTask {
        partition: PartitionId,
        source: OpError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] shufflejoin_io::Error),

    #[error("worker failed: {0}")]
    Worker(String),
}

/// One shuffled record: routing key plus the tagged payload.
type ShuffledRecord = (JoinKey, TaggedTuple);

/// In-process repartition-join engine.
///
/// Owns a validated `JoinConfig` plus the wired components: one tagging
/// mapper per relation, the co-partition function, and the reducer.
pub struct Engine {
    config: JoinConfig,
    reducer: Arc<dyn Reducer>,
}

impl Engine {
    /// Engine with the streaming reducer (the production default).
    pub fn new(config: JoinConfig) -> Self {
        Self {
            config,
            reducer: Arc::new(StreamingJoin),
        }
    }

    /// Engine with a caller-supplied reducer (tests swap in the
    /// nested-loop reference here).
    pub fn with_reducer(config: JoinConfig, reducer: Arc<dyn Reducer>) -> Self {
        Self { config, reducer }
    }

    pub fn config(&self) -> &JoinConfig {
        &self.config
    }

    /// Run the join to completion and return its stats.
    pub fn run(&self) -> Result<JoinStats, ExecError> {
        let started_ms = now_millis();

        let mut partitions: Vec<Vec<ShuffledRecord>> =
            vec![Vec::new(); self.config.partitions];
        let mut counters = JoinCounters::default();
        let mut map_tasks = Vec::with_capacity(2);

        for (side, input, key_index) in [
            (
                Side::Left,
                self.config.input_left.as_str(),
                self.config.key_index_left,
            ),
            (
                Side::Right,
                self.config.input_right.as_str(),
                self.config.key_index_right,
            ),
        ] {
            let report =
                run_map_task(side, input, key_index, &mut partitions, &mut counters)?;
            map_tasks.push(report);
        }

        // Every record is routed; order each partition before any reduce
        // begins.
        for partition in &mut partitions {
            partition.sort_by(|a, b| grouping_cmp(&a.0, a.1.side, &b.0, b.1.side));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            partitions = self.config.partitions,
            records = counters.map_output_records,
            "map phase complete, partitions sorted"
        );

        let outcomes = self.run_reduce_phase(partitions)?;

        let mut reduce_tasks = Vec::with_capacity(outcomes.len());
        for (report, groups) in outcomes {
            counters.reduce_input_records += report.records_in;
            counters.reduce_input_groups += groups;
            counters.output_records += report.records_out;
            reduce_tasks.push(report);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            output_records = counters.output_records,
            "reduce phase complete"
        );

        Ok(JoinStats::new(
            started_ms,
            now_millis(),
            counters,
            map_tasks,
            reduce_tasks,
        ))
    }

    /// Reduce every partition concurrently and join the workers at one
    /// point. Each worker owns its partition's records and shard; there is
    /// no shared mutable state between partitions.
    fn run_reduce_phase(
        &self,
        partitions: Vec<Vec<ShuffledRecord>>,
    ) -> Result<Vec<(TaskReport, u64)>, ExecError> {
        let output = self.config.output.as_str();
        let reducer = &self.reducer;

        let results: Vec<Result<(TaskReport, u64), ExecError>> = thread::scope(|scope| {
            let handles: Vec<_> = partitions
                .into_iter()
                .enumerate()
                .map(|(index, records)| {
                    let reducer = Arc::clone(reducer);
                    scope.spawn(move || {
                        reduce_partition(
                            PartitionId::new(index as u64),
                            records,
                            reducer.as_ref(),
                            output,
                        )
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(ExecError::Worker("reduce worker panicked".to_string()))
                    })
                })
                .collect()
        });

        results.into_iter().collect()
    }
}

/// Map one relation: read, tag, and route every record. A malformed
/// record fails the task; silent drops would corrupt join completeness.
fn run_map_task(
    side: Side,
    input: &str,
    key_index: usize,
    partitions: &mut [Vec<ShuffledRecord>],
    counters: &mut JoinCounters,
) -> Result<TaskReport, ExecError> {
    let start = Instant::now();
    let mapper = TaggingMapper::new(side, key_index);
    let mut records_in = 0u64;
    let mut records_out = 0u64;

    for tuple in TupleReader::from_path(input)? {
        let tuple = tuple?;
        records_in += 1;
        let (key, tagged) = mapper.map(tuple).map_err(|source| ExecError::MapTask {
            task: mapper.name(),
            source,
        })?;
        let slot = partition_for_key(&key, partitions.len());
        partitions[slot].push((key, tagged));
        records_out += 1;
    }

    counters.map_input_records += records_in;
    counters.map_output_records += records_out;

    #[cfg(feature = "tracing")]
    tracing::trace!(task = mapper.name(), records = records_in, "map task finished");

    Ok(TaskReport {
        stage: Stage::Map,
        task: TaskId::new(side.index() as u64),
        records_in,
        records_out,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Reduce one partition: walk its ordered run, slice it into key groups,
/// and stream each group through the reducer into the partition's shard.
/// Returns the task report and the number of key groups seen.
fn reduce_partition(
    partition: PartitionId,
    records: Vec<ShuffledRecord>,
    reducer: &dyn Reducer,
    output_dir: &str,
) -> Result<(TaskReport, u64), ExecError> {
    let start = Instant::now();
    let mut writer = create_shard(output_dir, partition)?;

    let records_in = records.len() as u64;
    let mut records_out = 0u64;
    let mut groups = 0u64;

    let mut iter = records.into_iter().peekable();
    while let Some((key, first)) = iter.next() {
        groups += 1;
        let mut write_err = None;

        // One key group: the first record chained with the contiguous run
        // sharing its key. The reducer drains it in a single pass.
        let mut group = std::iter::once(first).chain(std::iter::from_fn(|| {
            let next_is_same = iter
                .peek()
                .map(|(next_key, _)| same_group(next_key, &key))
                .unwrap_or(false);
            if next_is_same {
                iter.next().map(|(_, tagged)| tagged)
            } else {
                None
            }
        }));

        reducer
            .reduce(&key, &mut group, &mut |pair| {
                if write_err.is_some() {
                    return;
                }
                match writer.write_pair(&pair) {
                    Ok(()) => records_out += 1,
                    Err(e) => write_err = Some(e),
                }
            })
            .map_err(|source| ExecError::ReduceTask { partition, source })?;

        if let Some(e) = write_err {
            return Err(e.into());
        }
    }

    writer.flush()?;

    Ok((
        TaskReport {
            stage: Stage::Reduce,
            task: TaskId::new(partition.get()),
            records_in,
            records_out,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        groups,
    ))
}

// --- helpers ---

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
