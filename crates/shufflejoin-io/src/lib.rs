#![forbid(unsafe_code)]
//! shufflejoin-io: streaming record readers and sharded output writers.
//!
//! Input records are headerless comma-separated lines; output shards are
//! one `part-NNNNN` file per partition under the configured output
//! directory.

pub mod error;
pub mod readers;
pub mod writers;

pub use error::{Error, Result};
pub use readers::csv::TupleReader;
pub use writers::csv::{create_shard, shard_path, PairWriter};
