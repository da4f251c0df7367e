//! Correlated tuple-stream generator for join benchmarks.

use std::io::Write;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::attribute::Attribute;
use crate::error::{Error, Result};
use crate::zipf::zipf_inverse_cdf;

/// Produces two correlated CSV tuple streams.
///
/// The emitted line format is the join's input format (key field first,
/// then the attribute payload), so generated streams can be fed straight
/// into the engine.
pub struct DataGenerator {
    rows: u64,
    unique_keys: u64,
    attributes: Vec<Attribute>,
}

impl DataGenerator {
    pub fn new(rows: u64, unique_keys: u64, attributes: Vec<Attribute>) -> Result<Self> {
        if rows == 0 {
            return Err(Error::InvalidArgument("row count must be at least 1".into()));
        }
        if unique_keys == 0 {
            return Err(Error::InvalidArgument(
                "key cardinality must be at least 1".into(),
            ));
        }
        Ok(Self {
            rows,
            unique_keys,
            attributes,
        })
    }

    fn render_row(&self, key: u64, rng: &mut impl Rng) -> String {
        let mut row = key.to_string();
        for attr in &self.attributes {
            row.push(',');
            row.push_str(attr.generate(rng));
        }
        row
    }

    fn write_row(&self, out: &mut impl Write, key: u64, rng: &mut impl Rng) -> Result<()> {
        writeln!(out, "{}", self.render_row(key, rng))?;
        Ok(())
    }

    /// Uniform mode: both streams get the same rendered row with the same
    /// modulo-derived key, so every key occurs equally often on both sides.
    pub fn write_uniform(
        &self,
        out1: &mut impl Write,
        out2: &mut impl Write,
        rng: &mut impl Rng,
    ) -> Result<()> {
        for i in 0..self.rows {
            let row = self.render_row(i % self.unique_keys, rng);
            writeln!(out1, "{row}")?;
            writeln!(out2, "{row}")?;
        }
        Ok(())
    }

    /// Skew mode: stream 1 is a uniformly shuffled permutation of the key
    /// space (the build side, one row per key); stream 2 draws `rows` keys
    /// from a Zipf distribution with skew `s` (the probe side), so a
    /// controllable fraction of keys dominates frequency.
    pub fn write_zipf(
        &self,
        out1: &mut impl Write,
        out2: &mut impl Write,
        s: f64,
        rng: &mut impl Rng,
    ) -> Result<()> {
        let mut keys: Vec<u64> = (0..self.unique_keys).collect();
        keys.shuffle(rng);
        for key in keys {
            self.write_row(out1, key, rng)?;
        }

        for i in 0..self.rows {
            let key = zipf_inverse_cdf(i as f64 / self.rows as f64, s, self.unique_keys)?;
            self.write_row(out2, key, rng)?;
        }
        Ok(())
    }

    /// Both streams Zipf-sampled with the same skew, sharing each row.
    pub fn write_zipf_both(
        &self,
        out1: &mut impl Write,
        out2: &mut impl Write,
        s: f64,
        rng: &mut impl Rng,
    ) -> Result<()> {
        for i in 0..self.rows {
            let key = zipf_inverse_cdf(i as f64 / self.rows as f64, s, self.unique_keys)?;
            let row = self.render_row(key, rng);
            writeln!(out1, "{row}")?;
            writeln!(out2, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn row_layout_is_key_then_attributes() {
        let mut rng = StdRng::seed_from_u64(3);
        let gen = DataGenerator::new(4, 2, vec![Attribute::new(5, &mut rng)]).unwrap();
        let (mut s1, mut s2) = (Vec::new(), Vec::new());
        gen.write_uniform(&mut s1, &mut s2, &mut rng).unwrap();

        let text = String::from_utf8(s1).unwrap();
        for (i, line) in text.lines().enumerate() {
            let mut parts = line.split(',');
            assert_eq!(parts.next().unwrap(), (i as u64 % 2).to_string());
            assert_eq!(parts.next().unwrap().len(), 5);
            assert!(parts.next().is_none());
        }
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(DataGenerator::new(0, 5, vec![Attribute::new(1, &mut rng)]).is_err());
        assert!(DataGenerator::new(5, 0, vec![]).is_err());
    }
}
