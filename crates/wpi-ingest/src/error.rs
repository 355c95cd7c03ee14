use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("open {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("{source_id}: workbook has no sheets")]
    NoSheets { source_id: String },
    #[error("{source_id}: file must have at least 2 rows")]
    TooFewRows { source_id: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
