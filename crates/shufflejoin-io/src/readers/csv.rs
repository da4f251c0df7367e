//! Line-oriented CSV tuple reader.

use std::fs::File;
use std::io::Read;

use shufflejoin_core::tuple::Tuple;

use crate::error::Result;

/// Streaming reader yielding one owned `Tuple` per input line.
///
/// Records are headerless and may vary in width; width validation belongs
/// to the map stage, which knows the configured key index. Every yielded
/// tuple owns its fields, so callers may hold it past the iteration step
/// that produced it.
pub struct TupleReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl TupleReader<File> {
    pub fn from_path(path: &str) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<R: Read> TupleReader<R> {
    pub fn from_reader(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self {
            records: reader.into_records(),
        }
    }
}

impl<R: Read> Iterator for TupleReader<R> {
    type Item = Result<Tuple>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(|r| Tuple::new(r.iter().map(|f| f.to_string()).collect()))
                .map_err(Into::into),
        )
    }
}
