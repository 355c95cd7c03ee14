//! Progress reporting wrapper over a place store.

use indicatif::ProgressBar;

use wpi_model::{ExistingPlace, PlaceRecord};
use wpi_store::{InsertAck, PlaceStore, Result};

/// Store decorator that advances a progress bar once per attempted batch,
/// whether or not the write succeeded. Snapshot reads pass through
/// untouched.
pub struct ProgressStore<'a> {
    inner: &'a dyn PlaceStore,
    bar: ProgressBar,
}

impl<'a> ProgressStore<'a> {
    #[must_use]
    pub fn new(inner: &'a dyn PlaceStore, bar: ProgressBar) -> Self {
        Self { inner, bar }
    }
}

impl PlaceStore for ProgressStore<'_> {
    fn fetch_existing_for_dedup(&self) -> Result<Vec<ExistingPlace>> {
        self.inner.fetch_existing_for_dedup()
    }

    fn insert_batch(&self, records: &[PlaceRecord]) -> Result<InsertAck> {
        let ack = self.inner.insert_batch(records);
        self.bar.inc(1);
        ack
    }
}
