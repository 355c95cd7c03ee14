use serde::{Deserialize, Serialize};

use crate::row::ParsedRow;

/// Terminal tally of one import run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResults {
    /// Rows acknowledged as written across all batches.
    pub imported_count: usize,
    /// Rows excluded purely because the duplicate flag was honored.
    pub skipped_duplicates: usize,
    /// Invalid rows plus rows whose batch failed at write time.
    pub error_rows: Vec<ParsedRow>,
    /// True when a cancel request stopped the run between batches.
    pub cancelled: bool,
}

impl ImportResults {
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_rows.len()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_rows.is_empty() && !self.cancelled
    }
}
