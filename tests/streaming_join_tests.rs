//! Streaming reducer correctness: the reference fixture, duplicate-key
//! cross products, and multiset equivalence against the nested-loop
//! oracle on randomized key groups.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shufflejoin_core::order::grouping_cmp;
use shufflejoin_core::tuple::{JoinKey, JoinedPair, Side, TaggedTuple, Tuple};
use shufflejoin_operators::join::nested::NestedLoopJoin;
use shufflejoin_operators::join::streaming::StreamingJoin;
use shufflejoin_operators::tag::TaggingMapper;
use shufflejoin_operators::traits::{MapStage, OpError, Reducer};

fn record(key: &str, side: Side, line: &str) -> (JoinKey, TaggedTuple) {
    (key.to_string(), TaggedTuple::new(side, Tuple::from_line(line)))
}

/// Sort a flat record list into grouping order and feed each key group
/// through `reducer`, collecting all emitted pairs.
fn run_groups(
    reducer: &dyn Reducer,
    mut records: Vec<(JoinKey, TaggedTuple)>,
) -> Vec<JoinedPair> {
    records.sort_by(|a, b| grouping_cmp(&a.0, a.1.side, &b.0, b.1.side));

    let mut out = Vec::new();
    let mut iter = records.into_iter().peekable();
    while let Some((key, first)) = iter.next() {
        let mut group = vec![first];
        while iter.peek().map(|(k, _)| k == &key).unwrap_or(false) {
            group.push(iter.next().unwrap().1);
        }
        let mut values = group.into_iter();
        reducer
            .reduce(&key, &mut values, &mut |pair| out.push(pair))
            .expect("reduce");
    }
    out
}

/// Render pairs as sortable lines for multiset comparison.
fn rendered(mut pairs: Vec<JoinedPair>) -> Vec<String> {
    let mut lines: Vec<String> = pairs
        .drain(..)
        .map(|p| format!("{}|{}|{}", p.key, p.left.to_line(), p.right.to_line()))
        .collect();
    lines.sort();
    lines
}

#[test]
fn reference_fixture_has_no_self_pairing() {
    // left = [(1,"a"), (2,"b")], right = [(1,"x"), (1,"y"), (3,"z")]
    let records = vec![
        record("1", Side::Left, "1,a"),
        record("2", Side::Left, "2,b"),
        record("1", Side::Right, "1,x"),
        record("1", Side::Right, "1,y"),
        record("3", Side::Right, "3,z"),
    ];

    let out = rendered(run_groups(&StreamingJoin, records));
    assert_eq!(out, vec!["1|1,a|1,x".to_string(), "1|1,a|1,y".to_string()]);
}

#[test]
fn single_sided_keys_emit_nothing() {
    let records = vec![
        record("only-left", Side::Left, "only-left,a"),
        record("only-left", Side::Left, "only-left,b"),
        record("only-right", Side::Right, "only-right,c"),
    ];
    assert!(run_groups(&StreamingJoin, records).is_empty());
}

#[test]
fn duplicate_keys_produce_the_full_cross_product() {
    let records = vec![
        record("k", Side::Left, "k,l1"),
        record("k", Side::Left, "k,l2"),
        record("k", Side::Left, "k,l3"),
        record("k", Side::Right, "k,r1"),
        record("k", Side::Right, "k,r2"),
    ];

    let out = run_groups(&StreamingJoin, records);
    assert_eq!(out.len(), 6);

    let lines = rendered(out);
    for l in ["l1", "l2", "l3"] {
        for r in ["r1", "r2"] {
            assert!(lines.contains(&format!("k|k,{l}|k,{r}")));
        }
    }
}

#[test]
fn streaming_matches_nested_loop_on_random_groups() {
    let mut rng = StdRng::seed_from_u64(42);
    for trial in 0..50 {
        let keys = 1 + rng.gen_range(0..4);
        let mut records = Vec::new();
        let mut expected = 0usize;

        for k in 0..keys {
            let m = rng.gen_range(0..6);
            let n = rng.gen_range(0..6);
            expected += m * n;
            for i in 0..m {
                records.push(record(
                    &format!("k{k}"),
                    Side::Left,
                    &format!("k{k},left-{i}"),
                ));
            }
            for i in 0..n {
                records.push(record(
                    &format!("k{k}"),
                    Side::Right,
                    &format!("k{k},right-{i}"),
                ));
            }
        }

        let streaming = run_groups(&StreamingJoin, records.clone());
        let nested = run_groups(&NestedLoopJoin, records);

        assert_eq!(streaming.len(), expected, "trial {trial}: m*n count");
        assert_eq!(
            rendered(streaming),
            rendered(nested),
            "trial {trial}: multiset equivalence"
        );
    }
}

#[test]
fn map_stage_is_idempotent_under_re_execution() {
    let mapper = TaggingMapper::new(Side::Left, 1);
    let tuple = Tuple::from_line("a,key-9,z");
    let first = mapper.map(tuple.clone()).expect("map");
    let second = mapper.map(tuple).expect("map");
    assert_eq!(first, second);
}

#[test]
fn map_stage_surfaces_narrow_records() {
    let mapper = TaggingMapper::new(Side::Right, 3);
    match mapper.map(Tuple::from_line("a,b")) {
        Err(OpError::KeyOutOfRange { index: 3, width: 2 }) => {}
        other => panic!("expected KeyOutOfRange, got {other:?}"),
    }
}
