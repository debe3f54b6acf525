//! Inventory file persistence.

/// JSON file reader/writer.
pub mod json;

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing an inventory file.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The file system refused the operation.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The store could not be encoded.
    #[error("failed to encode inventory for {}: {source}", path.display())]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },
    /// The file exists but does not hold an inventory object.
    #[error("malformed inventory file {}: {reason}", path.display())]
    Decode {
        /// Source file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// How a load concluded when it did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File parsed; `skipped` entries were dropped for breaking store rules.
    Loaded {
        /// Entries now in the store.
        items: usize,
        /// Entries that were ignored.
        skipped: usize,
    },
    /// No file at the path; the store was reset to empty.
    Missing,
    /// The file could not be parsed; the store was reset to empty.
    Malformed {
        /// Parser message.
        reason: String,
    },
}
