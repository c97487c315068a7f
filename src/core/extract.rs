use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use log::warn;
use regex::Regex;

/// Marker call used when neither the config file nor the CLI names one.
pub const DEFAULT_MARKER: &str = "Tr.tr";

/// Finds string literals passed as the sole argument of a marker call,
/// e.g. `Tr.tr("Hello")`.
///
/// This is a textual match, not a parser: the literal is the shortest text
/// between `marker("` and the next `")`. Escaped quotes are not interpreted.
#[derive(Debug, Clone)]
pub struct StringExtractor {
    pattern: Regex,
}

impl StringExtractor {
    pub fn new(marker: &str) -> Result<Self> {
        if marker.trim().is_empty() {
            bail!("Translation marker must not be empty");
        }

        let source = format!(r#"{}\("(.+?)"\)"#, regex::escape(marker));
        let pattern = Regex::new(&source)
            .with_context(|| format!("Invalid translation marker: \"{}\"", marker))?;

        Ok(Self { pattern })
    }

    /// Extract literals in occurrence order, duplicates retained.
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_owned())
            .collect()
    }

    /// Extract literals from a file on disk.
    ///
    /// An unreadable file is not an error: it is reported and yields nothing.
    pub fn extract_file(&self, path: &Path) -> Vec<String> {
        match fs::read(path) {
            Ok(bytes) => self.extract(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                warn!("can not read file: {} ({})", path.display(), e);
                Vec::new()
            }
        }
    }
}
