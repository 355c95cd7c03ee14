//! Resilient batched writes.

use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use wpi_model::{ImportResults, ParsedRow, PlaceRecord};
use wpi_store::PlaceStore;

use crate::cancel::CancelToken;
use crate::record::build_record;

/// Rows written to the store per request.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Error recorded on rows never attempted because of a cancel request.
pub const CANCELLED_MESSAGE: &str = "import cancelled before this row was written";

/// Knobs for one import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Rows per store write. Clamped to at least one.
    pub batch_size: usize,
    /// When set, rows flagged duplicate are counted and left unwritten.
    pub skip_duplicates: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            skip_duplicates: true,
        }
    }
}

/// Writes eligible rows to the store in fixed-size sequential batches.
///
/// A failed batch marks its rows errored and the run moves on; one bad
/// batch never hides the outcome of the others.
pub struct BatchImporter<'a> {
    store: &'a dyn PlaceStore,
    options: ImportOptions,
}

impl<'a> BatchImporter<'a> {
    #[must_use]
    pub fn new(store: &'a dyn PlaceStore) -> Self {
        Self::with_options(store, ImportOptions::default())
    }

    #[must_use]
    pub fn with_options(store: &'a dyn PlaceStore, options: ImportOptions) -> Self {
        Self { store, options }
    }

    /// Run the import over the session's parsed rows.
    ///
    /// Eligible rows are the valid ones, minus flagged duplicates when
    /// `skip_duplicates` is set. Batch failures and cancellations are
    /// recorded on the rows in place; nothing raises past the wizard. The
    /// returned results own clones of every errored row, ordered by source
    /// row number.
    pub fn run(
        &self,
        source_id: &str,
        rows: &mut [ParsedRow],
        cancel: &CancelToken,
    ) -> ImportResults {
        let span = info_span!("import", source_id = %source_id, rows = rows.len());
        let _guard = span.enter();
        let start = Instant::now();

        let batch_size = self.options.batch_size.max(1);
        let mut skipped_duplicates = 0usize;
        let mut eligible = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            if !row.is_valid {
                continue;
            }
            if self.options.skip_duplicates && row.is_duplicate {
                skipped_duplicates += 1;
                continue;
            }
            eligible.push(index);
        }

        let mut imported_count = 0usize;
        let mut cancelled = false;
        let batches: Vec<&[usize]> = eligible.chunks(batch_size).collect();
        for (batch_index, batch) in batches.iter().enumerate() {
            if cancel.is_cancelled() {
                cancelled = true;
                for later in &batches[batch_index..] {
                    for &index in *later {
                        rows[index].push_error(CANCELLED_MESSAGE);
                    }
                }
                warn!(batch_index, "import cancelled");
                break;
            }

            let records: Vec<PlaceRecord> = batch
                .iter()
                .map(|&index| build_record(source_id, &rows[index]))
                .collect();
            let batch_start = Instant::now();
            match self.store.insert_batch(&records) {
                Ok(ack) => {
                    imported_count += ack.inserted_ids.len();
                    debug!(
                        batch_index,
                        batch_rows = batch.len(),
                        duration_ms = batch_start.elapsed().as_millis(),
                        "batch written"
                    );
                }
                Err(err) => {
                    warn!(
                        batch_index,
                        batch_rows = batch.len(),
                        error = %err,
                        "batch write failed"
                    );
                    for &index in *batch {
                        rows[index].push_error(format!("batch write failed: {err}"));
                    }
                }
            }
        }

        let mut error_rows: Vec<ParsedRow> =
            rows.iter().filter(|row| !row.is_valid).cloned().collect();
        error_rows.sort_by_key(ParsedRow::row_number);

        let results = ImportResults {
            imported_count,
            skipped_duplicates,
            error_rows,
            cancelled,
        };
        info!(
            imported = results.imported_count,
            skipped_duplicates = results.skipped_duplicates,
            errors = results.error_count(),
            cancelled = results.cancelled,
            duration_ms = start.elapsed().as_millis(),
            "import complete"
        );
        results
    }
}
