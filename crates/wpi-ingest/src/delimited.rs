use std::path::Path;

use csv::ReaderBuilder;

use wpi_model::FileTable;

use crate::error::{IngestError, Result};
use crate::table;

/// Reads comma-separated text. The first record is the header; quoting and
/// embedded delimiters follow RFC 4180 via the csv reader.
pub fn read_delimited(path: &Path) -> Result<FileTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let source_id = table::source_id_of(path);
    let mut header: Option<Vec<String>> = None;
    let mut data: Vec<(u32, Vec<String>)> = Vec::new();
    let mut record_count = 0u32;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        record_count += 1;
        // Blank lines never reach us, so the reader position is what keeps
        // row numbers aligned with the operator's file.
        let line = record
            .position()
            .map_or(record_count, |position| position.line() as u32);
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        if header.is_none() {
            header = Some(cells);
        } else {
            data.push((line, cells));
        }
    }

    let Some(header) = header else {
        return Err(IngestError::TooFewRows { source_id });
    };
    Ok(table::assemble(&source_id, &header, &data))
}
