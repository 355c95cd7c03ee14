use std::path::PathBuf;

use thiserror::Error;

/// Failures while materializing report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to render error file: {source}")]
    Render {
        #[source]
        source: csv::Error,
    },
    #[error("failed to write error file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
