//! Co-partition routing: a pure, deterministic function of the key bytes.

/// Route `key` to a partition in `[0, partitions)`.
///
/// The tag never participates: both relations route through this same
/// function, so equal keys land in the same partition no matter which side
/// produced them. Hashing the key's bytes with blake3 keeps the spread
/// approximately uniform over the key domain.
pub fn partition_for_key(key: &str, partitions: usize) -> usize {
    debug_assert!(partitions >= 1);
    let digest = blake3::hash(key.as_bytes());
    let h = u64::from_le_bytes(digest.as_bytes()[0..8].try_into().unwrap());
    (h % partitions as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        for n in [1, 2, 3, 17, 256] {
            for i in 0..100 {
                assert!(partition_for_key(&format!("k{i}"), n) < n);
            }
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let p = partition_for_key("order-42", 16);
        assert_eq!(partition_for_key("order-42", 16), p);
    }

    #[test]
    fn single_partition_takes_everything() {
        for i in 0..50 {
            assert_eq!(partition_for_key(&i.to_string(), 1), 0);
        }
    }
}
