//! shufflejoin: repartition (shuffle) equi-join over two CSV relations.
//!
//! Facade crate: re-exports the public surface of the workspace members.
//! The benchmark in `benches/` builds against this package.

pub use shufflejoin_core::prelude::*;
pub use shufflejoin_exec::{Engine, ExecError};
pub use shufflejoin_io::{PairWriter, TupleReader};
pub use shufflejoin_operators::{
    joins_with, MapStage, NestedLoopJoin, OpError, Reducer, StreamingJoin, TaggingMapper,
};

pub use shufflejoin_datagen as datagen;
