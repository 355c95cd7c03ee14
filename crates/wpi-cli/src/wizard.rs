//! Drive helpers for the wizard subcommands.
//!
//! These wrap the session state machine with CLI concerns: `FIELD=COLUMN`
//! override parsing, preset lookup, and the error-file handoff after an
//! import. Everything here is plain synchronous glue so the subcommands in
//! the binary stay thin.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use tracing::info;

use wpi_core::{ImportSession, Stage};
use wpi_import::CancelToken;
use wpi_map::PresetStore;
use wpi_model::{ImportResults, ParsedRow};
use wpi_report::{default_error_path, write_error_file};
use wpi_store::PlaceStore;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "waypoint";
const APP_NAME: &str = "waypoint-import";

/// Inputs shared by the subcommands that open a file and build a mapping.
pub struct SessionSetup<'a> {
    pub file: &'a Path,
    /// Preset name to apply before the overrides.
    pub preset: Option<&'a str>,
    pub presets_dir: Option<&'a Path>,
    /// Raw `FIELD=COLUMN` override strings, applied in order.
    pub overrides: &'a [String],
}

/// What a completed run hands back to the summary printer.
pub struct RunOutcome {
    pub source_id: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub duplicate_rows: usize,
    pub eligible_rows: usize,
    pub results: ImportResults,
    /// Where the error report landed, when one was written.
    pub error_file: Option<PathBuf>,
}

/// Splits a `FIELD=COLUMN` override. An empty column clears the field.
///
/// # Errors
///
/// Rejects input without `=` and input with an empty field name.
pub fn parse_override(raw: &str) -> Result<(String, Option<String>)> {
    let (field, column) = raw
        .split_once('=')
        .with_context(|| format!("expected FIELD=COLUMN, got `{raw}`"))?;
    let field = field.trim();
    if field.is_empty() {
        bail!("expected FIELD=COLUMN, got `{raw}`");
    }
    let column = column.trim();
    let column = if column.is_empty() {
        None
    } else {
        Some(column.to_string())
    };
    Ok((field.to_lowercase(), column))
}

/// Platform config directory for saved presets, when one exists.
#[must_use]
pub fn default_presets_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Opens the preset store at the override directory or the platform
/// default.
///
/// # Errors
///
/// Fails when no directory can be determined or it cannot be created.
pub fn open_presets(dir: Option<&Path>) -> Result<PresetStore> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => default_presets_dir()
            .context("no presets directory available on this platform, pass --presets-dir")?,
    };
    Ok(PresetStore::new(dir)?)
}

/// Parses the upload and layers the mapping: auto-suggestions, then the
/// named preset, then the `--set` overrides in order.
///
/// # Errors
///
/// Fails on unreadable files, a missing preset, and overrides naming
/// unknown fields.
pub fn prepare_session<'a>(
    store: &'a dyn PlaceStore,
    setup: &SessionSetup<'_>,
) -> Result<ImportSession<'a>> {
    let mut session = ImportSession::new(store);
    session
        .upload(setup.file)
        .with_context(|| format!("read {}", setup.file.display()))?;
    if let Some(name) = setup.preset {
        let presets = open_presets(setup.presets_dir)?;
        let preset = presets
            .find_by_name(name)?
            .with_context(|| format!("no preset named `{name}`"))?;
        session.replace_mapping(preset.mapping)?;
    }
    for raw in setup.overrides {
        let (field, column) = parse_override(raw)?;
        session
            .set_mapping(&field, column.as_deref())
            .with_context(|| format!("apply --set {raw}"))?;
    }
    Ok(session)
}

/// Runs the import over a validated session and writes the error report
/// next to the input (or at the override path) when any rows errored.
///
/// A session with nothing eligible still reports: the invalid rows land in
/// the error file and the import itself is a no-op rather than a failure.
///
/// # Errors
///
/// Fails when the session has not reached the validate stage, or when the
/// store or error file cannot be written.
pub fn finish_import(
    session: &mut ImportSession<'_>,
    input: &Path,
    error_file: Option<&Path>,
) -> Result<RunOutcome> {
    if session.stage() != Stage::Validate {
        bail!("import requires a validated session");
    }
    let table = session.table().context("session holds no parsed upload")?;
    let source_id = table.source_id.clone();
    let columns = table.columns.clone();
    let total_rows = session.rows().len();
    let valid_rows = session.rows().iter().filter(|row| row.is_valid).count();
    let duplicate_rows = session.rows().iter().filter(|row| row.is_duplicate).count();
    let eligible_rows = session.eligible_count();

    let results = if eligible_rows == 0 {
        let mut error_rows: Vec<ParsedRow> = session
            .rows()
            .iter()
            .filter(|row| !row.is_valid)
            .cloned()
            .collect();
        error_rows.sort_by_key(ParsedRow::row_number);
        let skipped_duplicates = session
            .rows()
            .iter()
            .filter(|row| row.is_valid && row.is_duplicate)
            .count();
        ImportResults {
            imported_count: 0,
            skipped_duplicates,
            error_rows,
            cancelled: false,
        }
    } else {
        session.run_import(&CancelToken::default())?.clone()
    };

    let path = error_file.map_or_else(|| default_error_path(input), Path::to_path_buf);
    let written = write_error_file(&path, &columns, &results.error_rows)?;
    if written {
        info!(
            path = %path.display(),
            rows = results.error_count(),
            "error file written"
        );
    }

    Ok(RunOutcome {
        source_id,
        total_rows,
        valid_rows,
        duplicate_rows,
        eligible_rows,
        results,
        error_file: written.then_some(path),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_override;

    #[test]
    fn override_splits_field_and_column() {
        let (field, column) = parse_override("latitude=Lat").unwrap();
        assert_eq!(field, "latitude");
        assert_eq!(column.as_deref(), Some("Lat"));
    }

    #[test]
    fn override_trims_and_lowercases_the_field() {
        let (field, column) = parse_override(" Name = Place Name ").unwrap();
        assert_eq!(field, "name");
        assert_eq!(column.as_deref(), Some("Place Name"));
    }

    #[test]
    fn empty_column_clears_the_field() {
        let (field, column) = parse_override("category=").unwrap();
        assert_eq!(field, "category");
        assert_eq!(column, None);
    }

    #[test]
    fn missing_equals_is_rejected() {
        assert!(parse_override("latitude").is_err());
        assert!(parse_override("=Lat").is_err());
    }
}
