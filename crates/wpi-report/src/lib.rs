//! Import run reporting.
//!
//! Turns an [`wpi_model::ImportResults`] into operator-facing artifacts,
//! chiefly the downloadable error file that mirrors the original upload.

mod error;
mod error_file;

pub use error::{ReportError, Result};
pub use error_file::{default_error_path, error_file_contents, write_error_file};
