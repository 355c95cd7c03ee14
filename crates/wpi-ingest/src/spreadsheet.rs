use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use wpi_model::FileTable;

use crate::error::{IngestError, Result};
use crate::table;

/// Reads the first worksheet of a spreadsheet workbook.
pub fn read_spreadsheet(path: &Path) -> Result<FileTable> {
    let source_id = table::source_id_of(path);
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(sheet) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::NoSheets { source_id });
    };
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            source,
        })?;
    table_from_range(&source_id, &range)
}

/// Grid handling is split from workbook I/O so sheet semantics stay testable
/// without binary fixtures.
pub fn table_from_range(source_id: &str, range: &Range<Data>) -> Result<FileTable> {
    let grid: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    if grid.len() < 2 {
        return Err(IngestError::TooFewRows {
            source_id: source_id.to_string(),
        });
    }

    let mut grid = grid.into_iter();
    let header = grid.next().unwrap_or_default();
    let data: Vec<(u32, Vec<String>)> = grid
        .enumerate()
        .map(|(index, cells)| (index as u32 + 2, cells))
        .collect();
    Ok(table::assemble(source_id, &header, &data))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Float(value) => float_text(*value),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        other => other.to_string(),
    }
}

/// Spreadsheet numerics arrive as floats; whole values print without the
/// fractional part so identifier-like columns survive as typed.
fn float_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
