//! Configuration management for bomgen.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::bom::AggregateOptions;
use super::occurrence::Separator;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// BOM generation defaults
    pub bom: BomConfig,

    /// Output file settings
    pub export: ExportConfig,
}

/// Defaults for the generator options.
///
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BomConfig {
    /// Field separator (comma or semicolon)
    pub separator: Separator,

    /// Whether to list assemblies as BOM rows
    pub include_assemblies: bool,

    /// Whether to count hidden occurrences
    pub include_hidden: bool,
}

/// Output file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Extension appended to destinations given without one
    pub extension: String,

    /// Whether an existing destination may be replaced
    pub overwrite: bool,
}

impl BomConfig {
    /// Aggregation options carried by this config.
    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions::new(self.include_assemblies, self.include_hidden)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.bomgen.toml` in current directory
    /// 2. `~/.config/bomgen/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".bomgen.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = Self::config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bomgen"))
    }
}

impl Default for BomConfig {
    fn default() -> Self {
        Self { separator: Separator::Comma, include_assemblies: false, include_hidden: false }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { extension: "csv".to_string(), overwrite: true }
    }
}
