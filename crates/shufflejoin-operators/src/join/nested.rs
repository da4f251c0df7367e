//! Naive nested-loop reducer kept as the correctness reference.

use shufflejoin_core::tuple::{JoinKey, JoinedPair, TaggedTuple};

use crate::join::joins_with;
use crate::traits::{OpError, Reducer};

/// Buffers the whole key group and emits every cross-side pair.
///
/// Same output multiset as `StreamingJoin`, but holds the full group in
/// memory and iterates it twice. The equivalence tests use it as the
/// oracle.
#[derive(Debug, Default, Clone, Copy)]
pub struct NestedLoopJoin;

impl Reducer for NestedLoopJoin {
    fn name(&self) -> &'static str {
        "join_nested_loop"
    }

    fn reduce(
        &self,
        key: &JoinKey,
        values: &mut dyn Iterator<Item = TaggedTuple>,
        out: &mut dyn FnMut(JoinedPair),
    ) -> Result<(), OpError> {
        // The value iterator can only be walked once, so the group has to
        // be materialized before pairing.
        let group: Vec<TaggedTuple> = values.collect();

        for first in &group {
            for second in &group {
                if joins_with(first.side, second.side) {
                    out(JoinedPair {
                        key: key.clone(),
                        left: first.tuple.clone(),
                        right: second.tuple.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shufflejoin_core::tuple::{Side, Tuple};

    #[test]
    fn emits_the_full_cross_product_once() {
        let key: JoinKey = "k".to_string();
        let group = vec![
            TaggedTuple::new(Side::Left, Tuple::from_line("k,a")),
            TaggedTuple::new(Side::Right, Tuple::from_line("k,x")),
            TaggedTuple::new(Side::Right, Tuple::from_line("k,y")),
        ];
        let mut out = Vec::new();
        let mut values = group.into_iter();
        NestedLoopJoin
            .reduce(&key, &mut values, &mut |pair| out.push(pair))
            .unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.left.to_line() == "k,a"));
    }
}
