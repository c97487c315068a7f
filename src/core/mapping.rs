//! The key/string mapping and its flat `key = string` file format.
//!
//! A mapping file is line oriented:
//!
//! ```text
//!
//! s_AB12 = Hello
//! s_9XYZ = Goodbye
//! ```
//!
//! On read, blank lines, `#` comments and lines of three characters or fewer
//! are skipped, and every other line is split on its first `=`. On write,
//! entries are emitted in order with one leading and one trailing newline.

use std::{
    collections::HashMap,
    fmt,
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
    slice,
};

use anyhow::{Context, Result};
use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    pub key: String,
    pub value: String,
}

impl MappingEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of entries with unique keys.
///
/// Order is insertion order and decides the file layout on write.
/// Equality compares the ordered entries.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Mapping {}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&i| self.entries[i].value.as_str())
    }

    /// Insert an entry at the end, or replace the value of an existing key
    /// in place. Returns the replaced value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].value, value));
        }

        self.index.insert(key.clone(), self.entries.len());
        self.entries.push(MappingEntry { key, value });
        None
    }

    /// Parse the content of a mapping file. Malformed lines are dropped.
    pub fn parse(content: &str) -> Self {
        let mut mapping = Self::new();

        for line in content.lines() {
            let line = line.trim_end();
            let trimmed = line.trim_start();
            if trimmed.chars().count() <= 3 || trimmed.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                mapping.insert(key.trim(), value.trim());
            }
        }

        mapping
    }

    pub fn read_from<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::parse(&content))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = &'a MappingEntry;
    type IntoIter = slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes to the on-disk file format.
impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", entry.key, entry.value)?;
        }
        writeln!(f)
    }
}

/// Load a mapping file.
///
/// Returns `Ok(None)` when the file does not exist, which is distinct from an
/// existing empty file.
pub fn load_mapping(path: &Path) -> Result<Option<Mapping>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open file: {}", path.display()));
        }
    };

    Mapping::read_from(file)
        .map(Some)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

#[derive(Debug, Error)]
pub enum WriteError {
    /// Only existing mapping files are overwritten.
    #[error("file {} does not exist, not overwriting", .0.display())]
    Missing(PathBuf),
    #[error("failed to write file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { bytes: usize },
    /// The file already held exactly this content.
    Unchanged,
}

/// Overwrite an existing mapping file with `mapping`.
///
/// The write is not atomic: a failure midway can leave a truncated file.
pub fn write_mapping(path: &Path, mapping: &Mapping) -> Result<WriteOutcome, WriteError> {
    if !path.is_file() {
        warn!("file {} does not exist, not overwriting", path.display());
        return Err(WriteError::Missing(path.to_path_buf()));
    }

    let content = mapping.to_string();
    let io_error = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if fs::read(path).map_err(io_error)? == content.as_bytes() {
        return Ok(WriteOutcome::Unchanged);
    }

    fs::write(path, &content).map_err(io_error)?;
    info!("wrote {} bytes to file: {}", content.len(), path.display());

    Ok(WriteOutcome::Written {
        bytes: content.len(),
    })
}
