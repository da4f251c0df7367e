#![forbid(unsafe_code)]
//! shufflejoin-operators: the pure join components (tagging map stage,
//! streaming join reducer, nested-loop reference reducer, self-pairing
//! guard).
//!
//! Design intent:
//! - Keep this crate synchronous and free of side effects.
//! - Every component must be safely re-invocable with identical results
//!   for identical input; the execution substrate may retry tasks.

pub mod join;
pub mod tag;
pub mod traits;

pub use join::{joins_with, nested::NestedLoopJoin, streaming::StreamingJoin};
pub use tag::TaggingMapper;
pub use traits::{MapStage, OpError, Reducer};
