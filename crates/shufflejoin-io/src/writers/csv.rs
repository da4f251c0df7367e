//! Joined-pair writer and per-partition output shards.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use shufflejoin_core::id::PartitionId;
use shufflejoin_core::tuple::JoinedPair;

use crate::error::Result;

/// Writes joined pairs as CSV lines: the left tuple's fields followed by
/// the right tuple's fields.
pub struct PairWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl PairWriter<File> {
    pub fn to_path(path: &Path) -> Result<Self> {
        Ok(Self::to_writer(File::create(path)?))
    }
}

impl<W: Write> PairWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().flexible(true).from_writer(writer),
        }
    }

    pub fn write_pair(&mut self, pair: &JoinedPair) -> Result<()> {
        let fields = pair.left.fields().iter().chain(pair.right.fields().iter());
        self.writer.write_record(fields)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Path of one partition's output shard under `dir`.
pub fn shard_path(dir: &str, partition: PartitionId) -> PathBuf {
    Path::new(dir).join(format!("part-{:05}", partition.get()))
}

/// Open one partition's shard for writing, creating the output directory
/// if needed. Shards are disjoint: each partition owns exactly one file.
pub fn create_shard(dir: &str, partition: PartitionId) -> Result<PairWriter<File>> {
    fs::create_dir_all(dir)?;
    PairWriter::to_path(&shard_path(dir, partition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shufflejoin_core::tuple::Tuple;

    #[test]
    fn renders_left_then_right_fields() {
        let mut buf = Vec::new();
        {
            let mut writer = PairWriter::to_writer(&mut buf);
            writer
                .write_pair(&JoinedPair {
                    key: "1".to_string(),
                    left: Tuple::from_line("1,a"),
                    right: Tuple::from_line("1,x"),
                })
                .unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "1,a,1,x\n");
    }

    #[test]
    fn shard_names_are_zero_padded() {
        assert_eq!(
            shard_path("out", PartitionId::new(3)),
            PathBuf::from("out/part-00003")
        );
    }
}
