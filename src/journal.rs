//! Caller-supplied log of add operations.

use std::fmt;

use chrono::{DateTime, Local};

use crate::types::Quantity;

/// Timestamp format used when rendering entries.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One successful add, recorded for display.
///
/// Entries are observational only; the store never reads them back.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Local wall-clock time of the add.
    pub at: DateTime<Local>,
    /// Item that was adjusted.
    pub item: String,
    /// Quantity that was added, as requested by the caller.
    pub qty: Quantity,
}

impl LogEntry {
    /// Records an add that happened now.
    pub fn now(item: impl Into<String>, qty: Quantity) -> Self {
        Self {
            at: Local::now(),
            item: item.into(),
            qty,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Added {} of {}",
            self.at.format(TIMESTAMP_FORMAT),
            self.qty,
            self.item
        )
    }
}
