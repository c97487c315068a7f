//! Core reconciliation engine.
//!
//! - `extract`: finds marker-call string literals in one file
//! - `file_scanner`: walks a source tree and collects strings from matching files
//! - `mapping`: the ordered key/string mapping, its loader and writer
//! - `keygen`: fresh symbolic keys for new strings
//! - `reconcile`: diffs a previous mapping against the collected strings

pub mod extract;
pub mod file_scanner;
pub mod keygen;
pub mod mapping;
pub mod reconcile;

pub use extract::StringExtractor;
pub use file_scanner::{Collection, ScanResult, collect_strings, scan_files};
pub use keygen::{KeyGenerator, RandomKeyGenerator};
pub use mapping::{Mapping, MappingEntry, WriteError, WriteOutcome, load_mapping, write_mapping};
pub use reconcile::{Reconciliation, reconcile};
