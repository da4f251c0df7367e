//! Grouping order for shuffled records within one partition.
//!
//! Primary order is the key, so all records sharing a key form one
//! contiguous run; secondary order is the side, so every left record in a
//! run precedes every right record. Only the key participates in group
//! boundaries; the side never splits a group.

use std::cmp::Ordering;

use crate::tuple::Side;

/// Total order over `(key, side)` pairs.
pub fn grouping_cmp(a_key: &str, a_side: Side, b_key: &str, b_side: Side) -> Ordering {
    a_key.cmp(b_key).then_with(|| a_side.cmp(&b_side))
}

/// Group-boundary test: key equality alone.
pub fn same_group(a_key: &str, b_key: &str) -> bool {
    a_key == b_key
}
