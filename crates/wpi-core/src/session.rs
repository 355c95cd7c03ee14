//! Wizard session state machine.
//!
//! One session owns the whole run: the parsed upload, the column mapping,
//! the parsed rows and the final results. Stages move strictly forward,
//! with the single back edge from validate to mapping; every transition is
//! operator-triggered except the automatic jump from upload to mapping
//! after a successful parse.

use std::fmt;
use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use wpi_import::{BatchImporter, CancelToken, ImportOptions};
use wpi_ingest::ingest_file;
use wpi_map::{MappingHint, close_matches, suggest, unmapped_required, update};
use wpi_model::{
    ColumnMapping, FieldCatalog, FileTable, ImportResults, ParsedRow, TargetField,
};
use wpi_store::PlaceStore;
use wpi_transform::transform_row;
use wpi_validate::validate_row;

use crate::dedup::DuplicateDetector;
use crate::error::{Result, SessionError};

/// Wizard stages in flow order. `Imported` is terminal; a fresh run starts
/// with [`ImportSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    Mapping,
    Validate,
    Imported,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Upload => "upload",
            Stage::Mapping => "mapping",
            Stage::Validate => "validate",
            Stage::Imported => "imported",
        };
        write!(f, "{name}")
    }
}

/// The in-memory import session threading every pipeline stage together.
///
/// The session is the sole writer of its row and mapping state; callers
/// read between operations and propose edits through the methods here.
pub struct ImportSession<'a> {
    store: &'a dyn PlaceStore,
    catalog: FieldCatalog,
    options: ImportOptions,
    stage: Stage,
    table: Option<FileTable>,
    mapping: ColumnMapping,
    rows: Vec<ParsedRow>,
    results: Option<ImportResults>,
}

impl fmt::Debug for ImportSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportSession")
            .field("catalog", &self.catalog)
            .field("options", &self.options)
            .field("stage", &self.stage)
            .field("table", &self.table)
            .field("mapping", &self.mapping)
            .field("rows", &self.rows)
            .field("results", &self.results)
            .finish_non_exhaustive()
    }
}

impl<'a> ImportSession<'a> {
    #[must_use]
    pub fn new(store: &'a dyn PlaceStore) -> Self {
        Self {
            store,
            catalog: FieldCatalog::standard(),
            options: ImportOptions::default(),
            stage: Stage::Upload,
            table: None,
            mapping: ColumnMapping::new(),
            rows: Vec::new(),
            results: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn table(&self) -> Option<&FileTable> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    #[must_use]
    pub fn rows(&self) -> &[ParsedRow] {
        &self.rows
    }

    #[must_use]
    pub fn results(&self) -> Option<&ImportResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Batch size and duplicate handling for the eventual import. Read at
    /// import time; changing them earlier is always safe.
    pub fn set_options(&mut self, options: ImportOptions) {
        self.options = options;
    }

    /// Parse an upload and advance to the mapping stage, seeding the
    /// mapping with alias-based auto-suggestions.
    ///
    /// # Errors
    ///
    /// Parse failures are fatal to the stage: the session stays in upload
    /// with no partial state.
    pub fn upload(&mut self, path: &Path) -> Result<()> {
        self.expect_stage("upload", Stage::Upload)?;
        let span = info_span!("ingest", file = %path.display());
        let _guard = span.enter();
        let start = Instant::now();

        let table = ingest_file(path)?;
        self.mapping = suggest(&self.catalog, &table.columns);
        info!(
            source_id = %table.source_id,
            columns = table.columns.len(),
            rows = table.row_count(),
            auto_mapped = self.mapping.len(),
            duration_ms = start.elapsed().as_millis(),
            "upload parsed"
        );
        self.table = Some(table);
        self.stage = Stage::Mapping;
        Ok(())
    }

    /// Apply one operator mapping override.
    ///
    /// # Errors
    ///
    /// Rejects unknown field keys and any stage but mapping.
    pub fn set_mapping(&mut self, field_key: &str, column: Option<&str>) -> Result<()> {
        self.expect_stage("remap", Stage::Mapping)?;
        self.mapping = update(&self.catalog, &self.mapping, field_key, column)?;
        Ok(())
    }

    /// Replace the whole mapping, as when applying a saved preset.
    ///
    /// # Errors
    ///
    /// Rejects any stage but mapping.
    pub fn replace_mapping(&mut self, mapping: ColumnMapping) -> Result<()> {
        self.expect_stage("apply preset", Stage::Mapping)?;
        self.mapping = mapping;
        Ok(())
    }

    /// Required fields still missing a column.
    #[must_use]
    pub fn unmapped_required(&self) -> Vec<&'static TargetField> {
        unmapped_required(&self.catalog, &self.mapping)
    }

    /// Advisory close-match hints for leftover columns.
    #[must_use]
    pub fn hints(&self) -> Vec<MappingHint> {
        match self.table.as_ref() {
            Some(table) => close_matches(&self.catalog, &self.mapping, &table.columns),
            None => Vec::new(),
        }
    }

    /// Run transform, validation and duplicate detection across all rows,
    /// exactly once, and advance to the validate stage.
    ///
    /// # Errors
    ///
    /// Blocked while a required field is unmapped. A snapshot fetch
    /// failure is fatal and leaves the session in mapping; proceeding
    /// without the snapshot would silently disable dedup.
    pub fn advance_to_validate(&mut self) -> Result<()> {
        self.expect_stage("validation", Stage::Mapping)?;
        let missing = self.unmapped_required();
        if !missing.is_empty() {
            return Err(SessionError::RequiredUnmapped {
                fields: missing.iter().map(|field| field.key.to_string()).collect(),
            });
        }
        let table = self.current_table("validation")?;

        let snapshot = self.store.fetch_existing_for_dedup()?;
        let detector = DuplicateDetector::new(snapshot);

        let span = info_span!("validate", source_id = %table.source_id, rows = table.row_count());
        let _guard = span.enter();
        let start = Instant::now();

        let mut rows = Vec::with_capacity(table.rows.len());
        for raw in &table.rows {
            let transformed = transform_row(&self.catalog, &self.mapping, raw);
            let verdict = validate_row(&transformed.mapped);
            let mut errors = transformed.errors;
            errors.extend(verdict.errors);
            let mut parsed = ParsedRow {
                raw: raw.clone(),
                mapped: transformed.mapped,
                is_valid: errors.is_empty(),
                errors,
                is_duplicate: false,
                duplicate_of: None,
            };
            detector.annotate(&mut parsed);
            rows.push(parsed);
        }

        let valid = rows.iter().filter(|row| row.is_valid).count();
        let duplicates = rows.iter().filter(|row| row.is_duplicate).count();
        info!(
            rows = rows.len(),
            valid,
            duplicates,
            snapshot = detector.snapshot_len(),
            duration_ms = start.elapsed().as_millis(),
            "validation pass complete"
        );

        self.rows = rows;
        self.stage = Stage::Validate;
        Ok(())
    }

    /// Back navigation: discard the parsed rows and return to mapping.
    /// Re-entering validate regenerates them, since the mapping may have
    /// changed.
    ///
    /// # Errors
    ///
    /// Rejects any stage but validate.
    pub fn back_to_mapping(&mut self) -> Result<()> {
        self.expect_stage("back navigation", Stage::Validate)?;
        self.rows.clear();
        self.stage = Stage::Mapping;
        Ok(())
    }

    /// Rows the import would attempt under the current options.
    #[must_use]
    pub fn eligible_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| {
                row.is_valid && (!self.options.skip_duplicates || !row.is_duplicate)
            })
            .count()
    }

    /// Run the batched import and advance to the terminal imported stage.
    ///
    /// # Errors
    ///
    /// Requires the validate stage and at least one eligible row. Batch
    /// failures do not error here; they surface in the results.
    pub fn run_import(&mut self, cancel: &CancelToken) -> Result<&ImportResults> {
        self.expect_stage("import", Stage::Validate)?;
        if self.eligible_count() == 0 {
            return Err(SessionError::NoEligibleRows);
        }
        let source_id = self.current_table("import")?.source_id.clone();

        let importer = BatchImporter::with_options(self.store, self.options.clone());
        let results = importer.run(&source_id, &mut self.rows, cancel);

        self.stage = Stage::Imported;
        Ok(self.results.insert(results))
    }

    /// Drop all per-run state and return to the upload stage. The store
    /// handle and import options survive.
    pub fn reset(&mut self) {
        self.stage = Stage::Upload;
        self.table = None;
        self.mapping = ColumnMapping::new();
        self.rows.clear();
        self.results = None;
    }

    fn expect_stage(&self, operation: &'static str, expected: Stage) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SessionError::WrongStage {
                operation,
                expected,
                actual: self.stage,
            })
        }
    }

    fn current_table(&self, operation: &'static str) -> Result<&FileTable> {
        self.table.as_ref().ok_or(SessionError::WrongStage {
            operation,
            expected: Stage::Mapping,
            actual: Stage::Upload,
        })
    }
}
