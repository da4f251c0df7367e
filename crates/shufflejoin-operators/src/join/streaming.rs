//! Streaming join reducer: one pass per key group, left side buffered.

use shufflejoin_core::tuple::{JoinKey, JoinedPair, Side, TaggedTuple, Tuple};

use crate::traits::{OpError, Reducer};

/// Joins one ordered key group while holding only the group's left tuples.
///
/// The grouping order guarantees every left record arrives before the
/// first right record, so each right record can be paired against the
/// complete left buffer the moment it arrives and discarded. Working
/// memory is bounded by the left count of the heaviest key, not the full
/// group. A key seen on only one side emits nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct StreamingJoin;

impl Reducer for StreamingJoin {
    fn name(&self) -> &'static str {
        "join_streaming"
    }

    fn reduce(
        &self,
        key: &JoinKey,
        values: &mut dyn Iterator<Item = TaggedTuple>,
        out: &mut dyn FnMut(JoinedPair),
    ) -> Result<(), OpError> {
        let mut left_buffer: Vec<Tuple> = Vec::new();

        for value in values {
            match value.side {
                Side::Left => left_buffer.push(value.tuple),
                Side::Right => {
                    for left in &left_buffer {
                        out(JoinedPair {
                            key: key.clone(),
                            left: left.clone(),
                            right: value.tuple.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
