//! In-memory place store.

use std::sync::{Mutex, MutexGuard, PoisonError};

use wpi_model::{ExistingPlace, PlaceRecord};

use crate::error::Result;
use crate::{InsertAck, PlaceStore, dedup_entry};

/// Store backed by a plain `Vec`, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryPlaceStore {
    records: Mutex<Vec<PlaceRecord>>,
}

impl MemoryPlaceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated record set, e.g. to exercise dedup.
    #[must_use]
    pub fn seeded(records: Vec<PlaceRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Snapshot of everything written so far, in write order.
    #[must_use]
    pub fn records(&self) -> Vec<PlaceRecord> {
        self.guard().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<PlaceRecord>> {
        // Single-writer pipeline; a poisoned lock still holds valid data.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlaceStore for MemoryPlaceStore {
    fn fetch_existing_for_dedup(&self) -> Result<Vec<ExistingPlace>> {
        Ok(self.guard().iter().filter_map(dedup_entry).collect())
    }

    fn insert_batch(&self, records: &[PlaceRecord]) -> Result<InsertAck> {
        let mut held = self.guard();
        let mut inserted_ids = Vec::with_capacity(records.len());
        for record in records {
            inserted_ids.push(record.fingerprint.clone());
            held.push(record.clone());
        }
        Ok(InsertAck { inserted_ids })
    }
}
