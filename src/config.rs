//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/gridlite/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grid::{DEFAULT_SHEET_COLS, DEFAULT_SHEET_ROWS};
use crate::io::{CsvDialect, QuoteStyle};
use crate::records::DEFAULT_EMPTY_ROWS;

/// Failure to locate or write the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("failed to write config to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration that persists across sessions
///
/// Every field has a default, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Blank rows rendered after the last record
    pub empty_row_budget: usize,
    pub export: ExportConfig,
    pub import: ImportConfig,
    pub share: ShareConfig,
    pub sheet: SheetConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            empty_row_budget: DEFAULT_EMPTY_ROWS,
            export: ExportConfig::default(),
            import: ImportConfig::default(),
            share: ShareConfig::default(),
            sheet: SheetConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub filename: String,
    pub quote_style: QuoteStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "project-data.csv".to_string(),
            quote_style: QuoteStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub csv_dialect: CsvDialect,
}

/// What the share action hands to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "Project Management Spreadsheet".to_string(),
            text: "Check out this project management data".to_string(),
            url: "http://localhost:5173/".to_string(),
        }
    }
}

/// Dimensions of the free sheet grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SHEET_ROWS,
            cols: DEFAULT_SHEET_COLS,
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
