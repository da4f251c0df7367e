//! Record model for the two joined relations.
//!
//! Tuples own their field strings outright. Anything the reducer buffers
//! across a key group is therefore an independent value, never a view into
//! a reusable read buffer.

use serde::{Deserialize, Serialize};

/// Join key: the configured field's string value. Compared byte-wise for
/// equality, partitioning, and grouping only.
pub type JoinKey = String;

/// One CSV-style record: an ordered list of field strings, immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuple {
    fields: Vec<String>,
}

impl Tuple {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Parse one comma-separated input line.
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line.split(',').map(|f| f.to_string()).collect(),
        }
    }

    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(|s| s.as_str())
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields in this record.
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Render back to the comma-separated wire form.
    pub fn to_line(&self) -> String {
        self.fields.join(",")
    }
}

/// Source relation of a tagged record.
///
/// Exactly two relations are supported; the self-pairing guard depends on
/// that, so a third relation is unrepresentable rather than silently
/// mis-joined. The derived order places `Left` before `Right`, which the
/// grouping order relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Side {
    Left = 0,
    Right = 1,
}

impl Side {
    /// Numeric relation index (0 = left, 1 = right).
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A tuple carrying its source relation through the shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedTuple {
    pub side: Side,
    pub tuple: Tuple,
}

impl TaggedTuple {
    pub fn new(side: Side, tuple: Tuple) -> Self {
        Self { side, tuple }
    }
}

/// One joined output record: a left and a right tuple agreeing on the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedPair {
    pub key: JoinKey,
    pub left: Tuple,
    pub right: Tuple,
}
