//! Line-delimited JSON place store.
//!
//! One record per line, appended on insert. The format is what the CLI
//! writes and reads back for dedup; anything heavier lives behind a real
//! backend implementing the same trait.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use wpi_model::{ExistingPlace, PlaceRecord};

use crate::error::{Result, StoreError};
use crate::{InsertAck, PlaceStore, dedup_entry};

/// Store backed by a single append-only JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlPlaceStore {
    path: PathBuf,
}

impl JsonlPlaceStore {
    /// Point at a store file. Nothing is touched until the first read or
    /// write; a missing file reads as an empty store.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<PlaceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let mut records = Vec::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record =
                serde_json::from_str::<PlaceRecord>(line).map_err(|source| {
                    StoreError::Malformed {
                        path: self.path.clone(),
                        source,
                    }
                })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl PlaceStore for JsonlPlaceStore {
    fn fetch_existing_for_dedup(&self) -> Result<Vec<ExistingPlace>> {
        Ok(self
            .read_records()?
            .iter()
            .filter_map(dedup_entry)
            .collect())
    }

    fn insert_batch(&self, records: &[PlaceRecord]) -> Result<InsertAck> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        let mut inserted_ids = Vec::with_capacity(records.len());
        for record in records {
            let line = serde_json::to_string(record)?;
            writeln!(file, "{line}").map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
            inserted_ids.push(record.fingerprint.clone());
        }
        Ok(InsertAck { inserted_ids })
    }
}
