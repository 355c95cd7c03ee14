pub mod delimited;
pub mod error;
pub mod spreadsheet;
mod table;

use std::path::Path;

use wpi_model::FileTable;

pub use delimited::read_delimited;
pub use error::{IngestError, Result};
pub use spreadsheet::{read_spreadsheet, table_from_range};

/// Extensions routed to the spreadsheet reader; `open_workbook_auto` picks
/// the concrete format. Everything else is treated as delimited text.
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Parses an upload into a header-plus-rows table, choosing the reader from
/// the file extension.
pub fn ingest_file(path: &Path) -> Result<FileTable> {
    let is_spreadsheet = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SPREADSHEET_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        });
    if is_spreadsheet {
        spreadsheet::read_spreadsheet(path)
    } else {
        delimited::read_delimited(path)
    }
}
