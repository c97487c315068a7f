//! trsync - keep a translation strings file in sync with source code
//!
//! trsync scans a source tree for string literals wrapped in a marker call
//! such as `Tr.tr("Hello")`, then updates a flat `key = string` file: entries
//! whose string is no longer used are removed, new strings are appended under
//! freshly generated keys, and everything else keeps its key and position.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, logging, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, mapping file I/O and reconciliation

pub mod cli;
pub mod config;
pub mod core;
