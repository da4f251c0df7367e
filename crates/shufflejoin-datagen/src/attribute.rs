//! Random attribute payloads for generated tuples.

use rand::Rng;

const POOL_SIZE: usize = 100;
const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz123456789";

/// Fixed-length random attribute column.
///
/// Pre-generates a pool of `POOL_SIZE` strings once and samples the pool
/// per row; generating every cell fresh would dominate generation time.
pub struct Attribute {
    length: usize,
    pool: Vec<String>,
}

impl Attribute {
    pub fn new(length: usize, rng: &mut impl Rng) -> Self {
        let pool = (0..POOL_SIZE)
            .map(|_| {
                (0..length)
                    .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
                    .collect()
            })
            .collect();
        Self { length, pool }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// One attribute value, sampled from the pool.
    pub fn generate(&self, rng: &mut impl Rng) -> &str {
        &self.pool[rng.gen_range(0..POOL_SIZE)]
    }
}
