use thiserror::Error;

use wpi_ingest::IngestError;
use wpi_model::ModelError;
use wpi_store::StoreError;

use crate::session::Stage;

/// Hard failures the wizard surfaces to the operator.
///
/// Per-row problems never appear here; those are captured in the parsed
/// rows and the import results instead.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{operation} requires the {expected} stage, session is in {actual}")]
    WrongStage {
        operation: &'static str,
        expected: Stage,
        actual: Stage,
    },

    #[error("required fields unmapped: {}", .fields.join(", "))]
    RequiredUnmapped { fields: Vec<String> },

    #[error("no eligible rows to import")]
    NoEligibleRows,

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Field(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
