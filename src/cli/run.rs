use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{debug, info};

use super::{args::Arguments, error::SyncError};
use crate::{
    config::{Config, load_config, load_config_file},
    core::{
        KeyGenerator, Mapping, StringExtractor, WriteError, collect_strings, load_mapping,
        reconcile, write_mapping,
    },
};

/// Everything a sync run needs, resolved from arguments and config.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub strings_file: PathBuf,
    pub source_dir: PathBuf,
    pub init: bool,
    pub dry_run: bool,
    pub config: Config,
}

impl SyncOptions {
    /// Resolve options: CLI flags override the config file, which overrides defaults.
    pub fn from_args(args: Arguments, cwd: &Path) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                debug!("using config file {}", path.display());
                load_config_file(path)?
            }
            None => {
                let loaded = load_config(cwd)?;
                match &loaded.path {
                    Some(path) => debug!("using config file {}", path.display()),
                    None => debug!("no config file found, using defaults"),
                }
                loaded.config
            }
        };

        if let Some(glob) = args.glob {
            config.include = glob;
        }
        if let Some(marker) = args.marker {
            config.marker = marker;
        }
        config.validate()?;

        Ok(Self {
            strings_file: args.strings_file,
            source_dir: args.source_dir,
            init: args.init,
            dry_run: args.dry_run,
            config,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The strings file already matches the source tree.
    NoChanges,
    Updated { added: usize, removed: usize },
    /// Changes were found but `--dry-run` kept the file as is.
    DryRun { added: usize, removed: usize },
}

/// Bring the strings file in line with the strings used in the source tree.
pub fn sync<G>(options: &SyncOptions, keys: &mut G) -> Result<SyncOutcome, SyncError>
where
    G: KeyGenerator + ?Sized,
{
    let SyncOptions {
        strings_file,
        source_dir,
        init,
        dry_run,
        config,
    } = options;

    let (previous, needs_create) = match load_mapping(strings_file)? {
        Some(mapping) => (mapping, false),
        None if *init => {
            info!(
                "no strings file at {}, starting from an empty mapping",
                strings_file.display()
            );
            (Mapping::new(), true)
        }
        None => return Err(SyncError::MissingMapping(strings_file.clone())),
    };

    let extractor = StringExtractor::new(&config.marker)?;
    let include = config.include_pattern()?;
    let collection = collect_strings(source_dir, &include, &extractor);
    debug!(
        "found {} strings in {} files ({} paths skipped)",
        collection.strings.len(),
        collection.files_scanned,
        collection.skipped_count
    );

    if collection.strings.is_empty() {
        return Err(SyncError::NoStringsFound(source_dir.clone()));
    }

    let result = reconcile(&previous, &collection.strings, keys)?;
    if result.is_unchanged() {
        info!("no changes detected");
        return Ok(SyncOutcome::NoChanges);
    }

    let added = result.added.len();
    let removed = result.removed.len();

    if *dry_run {
        info!(
            "dry run: {} to add, {} to remove, {} not written",
            added,
            removed,
            strings_file.display()
        );
        return Ok(SyncOutcome::DryRun { added, removed });
    }

    if needs_create {
        create_empty(strings_file)?;
    }

    match write_mapping(strings_file, &result.mapping) {
        Ok(_) => Ok(SyncOutcome::Updated { added, removed }),
        Err(WriteError::Missing(path)) => Err(SyncError::WriteFailed(path)),
        Err(err) => Err(anyhow::Error::new(err).into()),
    }
}

fn create_empty(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    Ok(())
}
