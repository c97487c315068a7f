use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    extract::{DEFAULT_MARKER, StringExtractor},
    file_scanner::DEFAULT_INCLUDE,
    keygen::{DEFAULT_KEY_LENGTH, DEFAULT_KEY_PREFIX},
};

pub const CONFIG_FILE_NAME: &str = ".trsyncrc.json";

pub const MAX_KEY_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Call whose sole string-literal argument is a translatable string.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// File-name glob selecting the source files to scan.
    #[serde(default = "default_include")]
    pub include: String,
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    #[serde(default = "default_key_length")]
    pub key_length: usize,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_include() -> String {
    DEFAULT_INCLUDE.to_string()
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_key_length() -> usize {
    DEFAULT_KEY_LENGTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            include: default_include(),
            key_prefix: default_key_prefix(),
            key_length: default_key_length(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        self.include_pattern()?;
        StringExtractor::new(&self.marker)?;

        // Keys are written unquoted before the `=` separator.
        if self.key_prefix.is_empty()
            || self.key_prefix.contains('=')
            || self.key_prefix.chars().any(char::is_whitespace)
        {
            bail!(
                "Invalid 'keyPrefix': \"{}\" (must be non-empty, without '=' or whitespace)",
                self.key_prefix
            );
        }

        if !(1..=MAX_KEY_LENGTH).contains(&self.key_length) {
            bail!(
                "Invalid 'keyLength': {} (must be between 1 and {})",
                self.key_length,
                MAX_KEY_LENGTH
            );
        }

        Ok(())
    }

    pub fn include_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.include)
            .with_context(|| format!("Invalid glob pattern in 'include': \"{}\"", self.include))
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Read and validate a config file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Discover a config file from `start_dir` upwards, falling back to defaults.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
