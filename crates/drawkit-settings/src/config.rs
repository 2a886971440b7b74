//! Configuration and settings management for DrawKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Undo history settings
//! - Label overrides (resource key to display string)
//! - Keyboard shortcut overrides (action key to key stroke)

use crate::error::{SettingsError, SettingsResult};
use crate::labels::Labels;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Name of the directory created under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "drawkit";

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Undo history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UndoSettings {
    /// Maximum number of edits kept on the undo stack
    pub limit: usize,
}

impl Default for UndoSettings {
    fn default() -> Self {
        Self { limit: 50 }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Undo history settings
    pub undo: UndoSettings,
    /// Label overrides keyed by full resource key (e.g. `edit.align.text`)
    pub labels: HashMap<String, String>,
    /// Shortcut overrides keyed by action key (e.g. `edit.alignNorth`)
    pub shortcuts: HashMap<String, String>,
}

enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(SettingsError::UnsupportedFormat(
            "Config file must be .json or .toml".to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config directory for DrawKit.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("No config directory on this platform".to_string())
            })
    }

    /// Default config file location.
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config at `path`, or defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_for(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.undo.limit == 0 {
            return Err(SettingsError::InvalidSetting {
                key: "undo.limit".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        for (key, stroke) in &self.shortcuts {
            if stroke.trim().is_empty() {
                return Err(SettingsError::InvalidSetting {
                    key: format!("shortcuts.{}", key),
                    reason: "key stroke must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Builds the label bundle: built-in labels, then label overrides, then
    /// shortcut overrides as `<key>.accelerator`.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::builtin();
        labels.merge(&self.labels);
        for (key, stroke) in &self.shortcuts {
            labels.insert(format!("{}.accelerator", key), stroke.clone());
        }
        labels
    }
}
