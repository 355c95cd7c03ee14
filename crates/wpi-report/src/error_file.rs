//! Error export file.
//!
//! The file hands the operator back exactly the rows that need correction:
//! original cells under the original columns, prefixed by the source row
//! number and the accumulated error messages. Fix, delete the two leading
//! columns, re-upload.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use wpi_model::ParsedRow;

use crate::error::{ReportError, Result};

/// Suggested export location: `<stem>-errors.csv` next to the input file.
#[must_use]
pub fn default_error_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "import".to_string(), |s| s.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}-errors.csv"))
}

/// Render the error rows as delimited text.
///
/// Header is `"Row Number","Errors"` followed by the original source columns
/// in original order. Every value is quote-wrapped with internal quotes
/// doubled, so cells may carry commas, quotes and newlines from the upload
/// unchanged. The rendering carries no trailing newline.
///
/// # Errors
///
/// Returns an error when a record cannot be serialized.
pub fn error_file_contents(columns: &[String], rows: &[ParsedRow]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(
            ["Row Number", "Errors"]
                .into_iter()
                .chain(columns.iter().map(String::as_str)),
        )
        .map_err(render_error)?;

    for row in rows {
        let mut record = vec![row.row_number().to_string(), row.errors.join("; ")];
        record.extend(
            columns
                .iter()
                .map(|column| row.raw.cell(column).unwrap_or("").to_string()),
        );
        writer.write_record(&record).map_err(render_error)?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|source| render_error(source.into_error().into()))?;
    let mut contents = String::from_utf8_lossy(&buffer).into_owned();
    if contents.ends_with('\n') {
        contents.pop();
    }
    Ok(contents)
}

/// Write the error export, or skip it entirely when there is nothing to
/// report. Returns whether a file was written.
///
/// # Errors
///
/// Returns an error when the rendering fails or the file cannot be written.
pub fn write_error_file(path: &Path, columns: &[String], rows: &[ParsedRow]) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    let contents = error_file_contents(columns, rows)?;
    fs::write(path, format!("{contents}\n")).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

fn render_error(source: csv::Error) -> ReportError {
    ReportError::Render { source }
}
