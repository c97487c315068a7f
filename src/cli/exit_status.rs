use std::process::ExitCode;

/// Exit status of a sync run.
///
/// - `Success` (0): mapping updated, or already up to date
/// - `MissingMapping` (1): strings file absent and `--init` not given
/// - `NoStringsFound` (2): no translatable strings in the source tree
/// - `WriteFailed` (3): strings file could not be overwritten
/// - `Error` (4): anything else (invalid config, unexpected I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    MissingMapping,
    NoStringsFound,
    WriteFailed,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::MissingMapping => 1,
            ExitStatus::NoStringsFound => 2,
            ExitStatus::WriteFailed => 3,
            ExitStatus::Error => 4,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
