use std::process::ExitCode;

use clap::Parser;
use trsync::cli::{Arguments, ExitStatus, logger};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print().ok();
            // Help and version requests are not failures.
            return if err.use_stderr() {
                ExitStatus::Error.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    if let Err(err) = logger::init(args.verbose) {
        eprintln!("Error: {}", err);
        return ExitStatus::Error.into();
    }

    match trsync::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
