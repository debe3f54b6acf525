//! Indented JSON inventory files.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::store::StockSnapshot;

use super::{PersistError, PersistResult};

const INDENT: &[u8] = b"    ";

/// Inventory file at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Targets the file at `path`. Nothing is opened until read or write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this file reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot, or `None` when the file does not exist.
    pub fn read(&self) -> PersistResult<Option<StockSnapshot>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|err| PersistError::Decode {
                path: self.path.clone(),
                reason: err.to_string(),
            })
    }

    /// Overwrites the file with `snapshot`, four-space indented.
    pub fn write(&self, snapshot: &StockSnapshot) -> PersistResult<()> {
        let file = File::create(&self.path).map_err(|source| self.io_error(source))?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        snapshot.serialize(&mut ser).map_err(|source| {
            if source.is_io() {
                self.io_error(source.into())
            } else {
                PersistError::Encode {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        writer.write_all(b"\n").map_err(|source| self.io_error(source))?;
        writer.flush().map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::types::Quantity;

    #[test]
    fn writes_four_space_indented_object() {
        let tmp = TempDir::new().expect("tmp");
        let file = JsonFile::new(tmp.path().join("inventory.json"));
        let snapshot = StockSnapshot {
            entries: vec![
                ("apple".to_string(), Quantity::Int(7)),
                ("flour".to_string(), Quantity::Real(2.5)),
            ],
        };

        file.write(&snapshot).expect("write");
        let text = fs::read_to_string(file.path()).expect("read back");
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"flour\": 2.5\n}\n");
    }

    #[test]
    fn missing_file_reads_as_none() {
        let tmp = TempDir::new().expect("tmp");
        let file = JsonFile::new(tmp.path().join("absent.json"));
        assert_eq!(file.read().expect("read"), None);
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ \"apple\": ").expect("seed");

        let err = JsonFile::new(&path).read().expect_err("should fail");
        assert!(matches!(err, PersistError::Decode { .. }));
    }

    #[test]
    fn directory_path_is_an_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = JsonFile::new(tmp.path()).read().expect_err("should fail");
        assert!(matches!(err, PersistError::Io { .. }));
    }
}
