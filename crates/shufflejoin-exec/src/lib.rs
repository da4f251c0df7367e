#![forbid(unsafe_code)]
//! shufflejoin-exec: in-process execution engine for the repartition join.
//!
//! The runtime simulates the contract a distributed substrate provides:
//! every record reaches exactly one partition chosen by the co-partition
//! function, each partition is ordered by the grouping order before any
//! reduce begins, and the reducer sees each key group exactly once as one
//! ordered run. The pure components stay pluggable into a real engine
//! later via message-passing worker tasks.

pub mod runtime;

pub use runtime::{Engine, ExecError};
