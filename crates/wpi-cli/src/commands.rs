use anyhow::{Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};

use wpi_cli::progress::ProgressStore;
use wpi_cli::wizard::{RunOutcome, SessionSetup, finish_import, open_presets, prepare_session};
use wpi_core::{ImportSession, SessionError};
use wpi_import::ImportOptions;
use wpi_model::FieldCatalog;
use wpi_store::{JsonlPlaceStore, MemoryPlaceStore, PlaceStore};

use crate::cli::{CheckArgs, MapArgs, PresetArgs, PresetCommand, RunArgs};
use crate::summary;

pub fn run_import_command(args: &RunArgs) -> Result<RunOutcome> {
    let store = JsonlPlaceStore::new(&args.store);
    let bar = batch_progress_bar();
    let progress = ProgressStore::new(&store, bar.clone());
    let setup = SessionSetup {
        file: &args.file,
        preset: args.preset.as_deref(),
        presets_dir: args.presets_dir.as_deref(),
        overrides: &args.set,
    };
    let mut session = prepare_session(&progress, &setup)?;
    session.set_options(ImportOptions {
        batch_size: args.batch_size,
        skip_duplicates: !args.include_duplicates,
    });
    advance(&mut session)?;

    let batch_size = session.options().batch_size.max(1);
    let batches = session.eligible_count().div_ceil(batch_size);
    bar.set_length(batches as u64);
    let outcome = finish_import(&mut session, &args.file, args.error_file.as_deref())?;
    bar.finish_and_clear();
    Ok(outcome)
}

/// Returns true when every row validated cleanly.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let store: Box<dyn PlaceStore> = match &args.store {
        Some(path) => Box::new(JsonlPlaceStore::new(path)),
        None => Box::new(MemoryPlaceStore::new()),
    };
    let setup = SessionSetup {
        file: &args.file,
        preset: args.preset.as_deref(),
        presets_dir: args.presets_dir.as_deref(),
        overrides: &args.set,
    };
    let mut session = prepare_session(store.as_ref(), &setup)?;
    advance(&mut session)?;
    summary::print_check_preview(session.rows(), session.eligible_count());
    Ok(session.rows().iter().all(|row| row.is_valid))
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let store = MemoryPlaceStore::new();
    let setup = SessionSetup {
        file: &args.file,
        preset: None,
        presets_dir: args.presets_dir.as_deref(),
        overrides: &args.set,
    };
    let session = prepare_session(&store, &setup)?;
    summary::print_mapping(&session);
    if let Some(name) = &args.save_preset {
        let presets = open_presets(args.presets_dir.as_deref())?;
        let saved = presets.save(name, session.mapping())?;
        println!(
            "Saved preset `{}` (id {}) to {}",
            saved.name,
            saved.id,
            presets.path().display()
        );
    }
    Ok(())
}

pub fn run_fields() {
    summary::print_fields(&FieldCatalog::standard());
}

pub fn run_preset(args: &PresetArgs) -> Result<()> {
    let presets = open_presets(args.presets_dir.as_deref())?;
    match &args.command {
        PresetCommand::List => {
            summary::print_presets(&presets.list()?, presets.path());
        }
        PresetCommand::Delete { id } => {
            if presets.delete(id)? {
                println!("Deleted preset {id}");
            } else {
                bail!("no preset with id `{id}`");
            }
        }
    }
    Ok(())
}

fn advance(session: &mut ImportSession<'_>) -> Result<()> {
    session.advance_to_validate().map_err(|error| {
        if matches!(error, SessionError::RequiredUnmapped { .. }) {
            anyhow!(error).context("mapping incomplete; the map subcommand shows suggestions")
        } else {
            anyhow!(error)
        }
    })
}

fn batch_progress_bar() -> ProgressBar {
    let bar = ProgressBar::no_length();
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}
