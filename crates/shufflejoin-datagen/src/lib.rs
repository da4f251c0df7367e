#![forbid(unsafe_code)]
//! shufflejoin-datagen: synthetic benchmark data for the join.
//!
//! Produces two correlated CSV tuple streams with configurable key
//! cardinality and either uniform or Zipf-skewed key frequency. Library
//! only: the join never invokes this; tests and benches consume it as a
//! fixture source.

pub mod attribute;
pub mod error;
pub mod generator;
pub mod zipf;

pub use attribute::Attribute;
pub use error::{Error, Result};
pub use generator::DataGenerator;
pub use zipf::{generalized_harmonic, max_zipf_repeats, zipf_inverse_cdf};
