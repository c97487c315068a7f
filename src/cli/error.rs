use std::path::PathBuf;

use thiserror::Error;

use super::exit_status::ExitStatus;

/// Ways a sync run can abort.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The strings file does not exist and initialize mode is off.
    #[error("no strings file at {}, abort", .0.display())]
    MissingMapping(PathBuf),
    /// Guards against wiping the strings file after a misconfigured scan.
    #[error("no source strings found in {}, abort", .0.display())]
    NoStringsFound(PathBuf),
    #[error("could not write output to {}, abort", .0.display())]
    WriteFailed(PathBuf),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SyncError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            SyncError::MissingMapping(_) => ExitStatus::MissingMapping,
            SyncError::NoStringsFound(_) => ExitStatus::NoStringsFound,
            SyncError::WriteFailed(_) => ExitStatus::WriteFailed,
            SyncError::Other(_) => ExitStatus::Error,
        }
    }
}
