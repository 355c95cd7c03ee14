//! Backing-store contract for the import pipeline.
//!
//! The pipeline talks to persistence through the narrow [`PlaceStore`]
//! trait: one snapshot read for duplicate detection and one batched write.
//! Two implementations ship here, an in-memory store for tests and wizard
//! dry-runs and a line-delimited JSON store for the CLI.
//!
//! Delivery is at-least-once. A batch that fails mid-write may leave some of
//! its records persisted; replay protection is the caller's concern, via the
//! record fingerprints.

mod error;
mod jsonl;
mod memory;

pub use error::{Result, StoreError};
pub use jsonl::JsonlPlaceStore;
pub use memory::MemoryPlaceStore;

use wpi_model::{ExistingPlace, PlaceRecord};

/// Acknowledgement of one batch write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertAck {
    /// Store-assigned identifiers, one per written record, in input order.
    pub inserted_ids: Vec<String>,
}

/// Read/write contract a backing store must offer the pipeline.
pub trait PlaceStore: Send + Sync {
    /// Fetch the snapshot duplicate detection runs against.
    ///
    /// Called once per wizard run, never per row. Records missing a name or
    /// a coordinate are omitted; they cannot match anything.
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot cannot be produced. The wizard
    /// treats that as fatal since dedup would silently degrade otherwise.
    fn fetch_existing_for_dedup(&self) -> Result<Vec<ExistingPlace>>;

    /// Write one batch of records.
    ///
    /// All-or-nothing per batch from the pipeline's point of view: an error
    /// marks every row of the batch as failed, whatever the store managed
    /// to persist.
    ///
    /// # Errors
    ///
    /// Returns an error when the batch was not acknowledged.
    fn insert_batch(&self, records: &[PlaceRecord]) -> Result<InsertAck>;
}

/// Project a stored record into the dedup snapshot shape, if it carries
/// enough to be matchable.
pub(crate) fn dedup_entry(record: &PlaceRecord) -> Option<ExistingPlace> {
    let name = record.name()?;
    let latitude = record.latitude()?;
    let longitude = record.longitude()?;
    Some(ExistingPlace {
        id: record.fingerprint.clone(),
        name: name.to_string(),
        latitude,
        longitude,
    })
}
