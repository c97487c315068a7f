//! CLI argument definitions using clap.
//!
//! `trsync [OPTIONS] <STRINGS_FILE> <SOURCE_DIR>` scans `SOURCE_DIR` for
//! translatable strings and updates `STRINGS_FILE` to match.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Strings file to update
    pub strings_file: PathBuf,

    /// Base directory to search for source files
    pub source_dir: PathBuf,

    /// Initialize: treat a missing strings file as empty and create it
    #[arg(short, long)]
    pub init: bool,

    /// File-name glob of source files to scan (overrides config file)
    #[arg(long)]
    pub glob: Option<String>,

    /// Marker call wrapping translatable strings, e.g. `Tr.tr` (overrides config file)
    #[arg(long)]
    pub marker: Option<String>,

    /// Config file path (default: discover .trsyncrc.json from the current directory)
    #[arg(long, env = "TRSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report changes without writing the strings file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
