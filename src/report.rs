//! Console listing of store contents.

use std::fmt;

use crate::types::Quantity;

/// Heading printed above the item lines.
pub const REPORT_HEADER: &str = "Items Report";

/// Item/quantity pairs in store order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    rows: Vec<(String, Quantity)>,
}

impl Report {
    /// Wraps already-ordered rows.
    pub fn new(rows: Vec<(String, Quantity)>) -> Self {
        Self { rows }
    }

    /// Rows in store order.
    pub fn rows(&self) -> &[(String, Quantity)] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the store was empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for Report {
    type Item = (String, Quantity);
    type IntoIter = std::vec::IntoIter<(String, Quantity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for (item, qty) in &self.rows {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}
