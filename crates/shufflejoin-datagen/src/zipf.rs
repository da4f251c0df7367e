//! Zipf sampling helpers for skewed benchmark keys.

use crate::error::{Error, Result};

const TOLERANCE: f64 = 0.01;
const MAX_ITERATIONS: usize = 1_000;

/// Approximation of the inverse CDF of the Zipf distribution over `1..=n`.
///
/// Newton iteration against an integral approximation of the CDF. The
/// candidate is clamped to stay `>= 1` each step (the approximation's
/// valid domain), and the iteration count is capped so skew values near
/// the singular `s = 1` still terminate; on cap exhaustion the current
/// candidate is returned.
///
/// `p` is the probability in `[0, 1]`; `s` is the skew (0 = none, 1 ≈ the
/// skew of English word frequency); `n` is the key cardinality.
pub fn zipf_inverse_cdf(p: f64, s: f64, n: u64) -> Result<u64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidArgument(format!(
            "p must be between 0 and 1, got {p}"
        )));
    }
    if (s - 1.0).abs() < f64::EPSILON {
        return Err(Error::InvalidArgument(
            "skew s = 1 is singular for the CDF approximation".to_string(),
        ));
    }
    if n == 0 {
        return Err(Error::InvalidArgument(
            "key cardinality must be at least 1".to_string(),
        ));
    }

    let n = n as f64;
    let mut x = n / 2.0;

    let d = p
        * (12.0 * (n.powf(1.0 - s) - 1.0) / (1.0 - s) + 6.0 - 6.0 * n.powf(-s) + s
            - n.powf(-1.0 - s) * s);

    for _ in 0..MAX_ITERATIONS {
        let m = x.powf(-2.0 - s);
        let mx = m * x;
        let mxx = mx * x;
        let mxxx = mxx * x;

        let a = 12.0 * (mxxx - 1.0) / (1.0 - s) + 6.0 * (1.0 - mxx) + (s - mx * s) - d;
        let b = 12.0 * mxx + 6.0 * (s * mx) + m * s * (s + 1.0);
        let next = (x - a / b).max(1.0);

        let done = (next - x).abs() <= TOLERANCE;
        x = next;
        if done {
            break;
        }
    }

    Ok(x.clamp(1.0, n) as u64)
}

/// Nth generalized harmonic number `H(n, m)`, summed smallest-term-first.
pub fn generalized_harmonic(n: u64, m: f64) -> f64 {
    let mut value = 0.0;
    for k in (1..=n).rev() {
        value += 1.0 / (k as f64).powf(m);
    }
    value
}

/// Expected occurrence count of the most frequent key when drawing `count`
/// Zipf samples over `n` keys with skew `s`.
///
/// From the pmf `p(k) = 1 / (k^s * H(n, s))`: the rank-1 key is drawn
/// `count / H(n, s)` times in expectation.
pub fn max_zipf_repeats(n: u64, s: f64, count: u64) -> f64 {
    count as f64 / generalized_harmonic(n, s)
}
