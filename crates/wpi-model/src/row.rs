use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Coerced values keyed by target field key. Keys whose coercion produced
/// null are absent.
pub type MappedData = BTreeMap<String, FieldValue>;

/// One data row of the uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-indexed position in the source file counting the header row, so
    /// messages line up with what the operator sees in a spreadsheet app.
    /// Dropped blank rows keep their gap in the numbering.
    pub row_number: u32,
    /// Cell text keyed by source column header.
    pub cells: BTreeMap<String, String>,
}

impl RawRow {
    #[must_use]
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

/// Parsed upload: ordered headers plus the surviving data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileTable {
    /// Source file name; identifies the upload in messages and fingerprints.
    pub source_id: String,
    /// Header cells in first-occurrence order, trimmed, empties dropped.
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl FileTable {
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// One input row after coercion, validation and duplicate-checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedRow {
    pub raw: RawRow,
    pub mapped: MappedData,
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub is_duplicate: bool,
    /// Name of the matched existing record, when flagged duplicate.
    pub duplicate_of: Option<String>,
}

impl ParsedRow {
    #[must_use]
    pub fn row_number(&self) -> u32 {
        self.raw.row_number
    }

    /// Appends a failure and drops the validity flag. Batch write failures
    /// land here after validation has already passed.
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }
}
