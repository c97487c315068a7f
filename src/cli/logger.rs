use std::io::{self, Write};

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Writes log records to stderr with a colored level prefix.
struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    fn prefix(level: Level) -> colored::ColoredString {
        match level {
            Level::Error => "error:".bold().red(),
            Level::Warn => "warning:".bold().yellow(),
            Level::Info => "info:".bold(),
            Level::Debug | Level::Trace => "debug:".dimmed(),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} {}", Self::prefix(record.level()), record.args());
        }
    }

    fn flush(&self) {
        io::stderr().flush().ok();
    }
}

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Info and above by default, debug with `verbose`.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    let level = level_for(verbose);
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
