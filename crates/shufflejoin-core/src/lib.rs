//! shufflejoin-core: the pure data model of the repartition join.
//!
//! Tuples, tags, the co-partition function, the grouping order, run
//! configuration, and the stats surface. No I/O and no concurrency here;
//! everything in this crate is plain data and pure functions the exec
//! crate submits to an execution substrate.

pub mod config;
pub mod error;
pub mod id;
pub mod order;
pub mod partition;
pub mod prelude;
pub mod stats;
pub mod tuple;

/// Engine version recorded in stats for provenance.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
