//! Batched, failure-isolating writes to the place store.
//!
//! The importer takes the wizard's parsed rows, filters them down to the
//! eligible set, and writes fixed-size batches sequentially. A batch that
//! the store rejects retroactively marks its rows errored with the store's
//! message and the next batch still runs. Per-row and per-batch failures
//! are data, never panics or early returns; the caller always gets a full
//! [`wpi_model::ImportResults`] tally.
//!
//! Delivery is at-least-once: a partially persisted failed batch is still
//! counted as failed. Row fingerprints give stores enough to deduplicate
//! replays, this crate does not retry on its own.

mod cancel;
mod fingerprint;
mod importer;
mod record;

pub use cancel::CancelToken;
pub use fingerprint::row_fingerprint;
pub use importer::{BatchImporter, CANCELLED_MESSAGE, DEFAULT_BATCH_SIZE, ImportOptions};
pub use record::build_record;
