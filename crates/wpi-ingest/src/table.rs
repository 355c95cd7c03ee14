use std::collections::BTreeMap;
use std::path::Path;

use wpi_model::{FileTable, RawRow};

/// Strips surrounding whitespace and any byte-order mark from a header cell.
fn header_text(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Builds a table from a header row plus file-numbered data rows.
///
/// Empty and repeated header names are dropped from the column list and
/// their cells discarded. Rows whose every cell is blank are dropped; their
/// file position stays as a gap in the numbering. Cell text is stored as
/// read, trimming belongs to the transform stage.
pub(crate) fn assemble(source_id: &str, header: &[String], data: &[(u32, Vec<String>)]) -> FileTable {
    let mut columns: Vec<String> = Vec::new();
    let mut keys: Vec<Option<String>> = Vec::with_capacity(header.len());
    for cell in header {
        let name = header_text(cell);
        if name.is_empty() || columns.contains(&name) {
            keys.push(None);
        } else {
            columns.push(name.clone());
            keys.push(Some(name));
        }
    }

    let mut rows = Vec::new();
    for (row_number, cells) in data {
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut kept = BTreeMap::new();
        for (position, key) in keys.iter().enumerate() {
            let Some(key) = key else { continue };
            let value = cells.get(position).map(String::as_str).unwrap_or("");
            kept.insert(key.clone(), value.to_string());
        }
        rows.push(RawRow {
            row_number: *row_number,
            cells: kept,
        });
    }

    FileTable {
        source_id: source_id.to_string(),
        columns,
        rows,
    }
}

/// Name the upload by its file name; messages and fingerprints key off this.
pub(crate) fn source_id_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
