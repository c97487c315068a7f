use std::env;

use anyhow::Result;
use log::{info, warn};

use crate::core::RandomKeyGenerator;

mod args;
mod error;
mod exit_status;
pub mod logger;
mod run;

pub use args::Arguments;
pub use error::SyncError;
pub use exit_status::ExitStatus;
pub use run::{SyncOptions, SyncOutcome, sync};

/// Run a sync from parsed arguments.
///
/// Anticipated aborts are logged and turned into their exit status.
/// Anything else is returned as an error.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir()?;
    let options = SyncOptions::from_args(args, &cwd)?;
    let mut keys = RandomKeyGenerator::with_shape(
        rand::rng(),
        options.config.key_prefix.as_str(),
        options.config.key_length,
    );

    match sync(&options, &mut keys) {
        Ok(SyncOutcome::DryRun { .. }) => Ok(ExitStatus::Success),
        Ok(_) => {
            info!("update successful");
            Ok(ExitStatus::Success)
        }
        Err(SyncError::Other(err)) => Err(err),
        Err(err) => {
            warn!("{}", err);
            Ok(err.exit_status())
        }
    }
}
