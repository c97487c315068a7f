use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use walkdir::WalkDir;

use super::extract::StringExtractor;

/// File-name glob used when neither the config file nor the CLI names one.
pub const DEFAULT_INCLUDE: &str = "*.java";

/// Result of scanning a source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in traversal order.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively find files under `root` whose file name matches `include`.
///
/// Traversal is sorted by file name so the order is stable between runs.
/// A missing root is reported and yields no files.
pub fn scan_files(root: &Path, include: &Pattern) -> ScanResult {
    let mut result = ScanResult::default();

    if !root.is_dir() {
        warn!("does not exist/is not a directory: {}", root.display());
        return result;
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!("cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();

        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| include.matches(name));

        if name_matches && path.is_file() {
            result.files.push(path.to_path_buf());
        }
    }

    result
}

/// Strings found across a source tree.
#[derive(Debug, Default)]
pub struct Collection {
    /// Extracted literals, concatenated in traversal order.
    pub strings: Vec<String>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

pub fn collect_strings(root: &Path, include: &Pattern, extractor: &StringExtractor) -> Collection {
    let ScanResult {
        files,
        skipped_count,
    } = scan_files(root, include);

    let mut strings = Vec::new();
    for file in &files {
        let found = extractor.extract_file(file);
        debug!("{}: {} strings", file.display(), found.len());
        strings.extend(found);
    }

    Collection {
        strings,
        files_scanned: files.len(),
        skipped_count,
    }
}
