use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by a place store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read place store {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write place store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored record that no longer parses. Unlike mapping presets this is
    /// a hard failure: silently dropping store rows would corrupt dedup.
    #[error("malformed record in place store {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode place record: {0}")]
    Encode(#[from] serde_json::Error),

    /// Opaque backend refusal, reported per batch by the importer.
    #[error("{0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
