//! Tagging map stage: key extraction + relation tag.

use shufflejoin_core::tuple::{JoinKey, Side, TaggedTuple, Tuple};

use crate::traits::{MapStage, OpError};

/// Maps one relation's records to `(key, tagged tuple)` pairs.
pub struct TaggingMapper {
    side: Side,
    key_index: usize,
}

impl TaggingMapper {
    pub fn new(side: Side, key_index: usize) -> Self {
        Self { side, key_index }
    }
}

impl MapStage for TaggingMapper {
    fn name(&self) -> &'static str {
        match self.side {
            Side::Left => "map_left",
            Side::Right => "map_right",
        }
    }

    fn map(&self, tuple: Tuple) -> Result<(JoinKey, TaggedTuple), OpError> {
        let key = tuple
            .field(self.key_index)
            .ok_or(OpError::KeyOutOfRange {
                index: self.key_index,
                width: tuple.width(),
            })?
            .to_string();
        Ok((key, TaggedTuple::new(self.side, tuple)))
    }
}
