//! Configuration file support for ant-tree.
//!
//! Provides TOML-based configuration through `ant-tree.toml` files,
//! including data structures, file loading, and validation. The CLI merges
//! these values with command-line overrides into `TreeOptions`.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "ant-tree.toml";

const DEFAULT_BUILD_FILENAMES: &str = "build.xml";
const DEFAULT_BUILD_FILE_DIRECTORIES: &str = ".";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Comma-separated candidate build file names
    pub build_filenames: Option<String>,
    /// Comma-separated candidate directories, relative to the workspace folder
    pub build_file_directories: Option<String>,
    pub sort_targets_alphabetically: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(directories) = config.build_file_directories.as_deref() {
        for directory in split_list(directories) {
            if Path::new(&directory).is_absolute() {
                bail!(
                    "Invalid config: build_file_directories entry '{}' is absolute; \
                     entries are resolved relative to the workspace folder.",
                    directory
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Splits a comma-separated config value, trimming whitespace and dropping
/// empty entries.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolved tree options, after merging defaults, config file and CLI
/// overrides (CLI wins over config, config wins over defaults).
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub build_filenames: Vec<String>,
    pub build_file_directories: Vec<String>,
    pub sort_targets_alphabetically: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            build_filenames: split_list(DEFAULT_BUILD_FILENAMES),
            build_file_directories: split_list(DEFAULT_BUILD_FILE_DIRECTORIES),
            sort_targets_alphabetically: true,
        }
    }
}

impl TreeOptions {
    pub fn resolve(
        config: Option<&ConfigFile>,
        build_filenames: Option<&str>,
        build_file_directories: Option<&str>,
        no_sort: bool,
    ) -> Self {
        let defaults = TreeOptions::default();

        let filenames_raw = build_filenames
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.build_filenames.clone()));
        let directories_raw = build_file_directories
            .map(str::to_string)
            .or_else(|| config.and_then(|c| c.build_file_directories.clone()));

        // An empty or whitespace-only value falls back to the default.
        let build_filenames = filenames_raw
            .as_deref()
            .map(split_list)
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.build_filenames);
        let build_file_directories = directories_raw
            .as_deref()
            .map(split_list)
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.build_file_directories);

        let sort_targets_alphabetically = if no_sort {
            false
        } else {
            config
                .and_then(|c| c.sort_targets_alphabetically)
                .unwrap_or(defaults.sort_targets_alphabetically)
        };

        Self {
            build_filenames,
            build_file_directories,
            sort_targets_alphabetically,
        }
    }
}
