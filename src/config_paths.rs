//! Where gridlite keeps its files on disk
//!
//! Everything lives under one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/gridlite/`, falling back to `~/.config/gridlite/`
//! - Windows: `%APPDATA%\gridlite\`

use std::path::PathBuf;

use crate::config::ConfigError;

const APP_DIR: &str = "gridlite";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

#[cfg(target_os = "windows")]
fn base_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn base_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if missing and return it
pub fn ensure_logs_dir() -> Result<PathBuf, ConfigError> {
    let logs = logs_dir().ok_or(ConfigError::NoConfigDir)?;
    std::fs::create_dir_all(&logs).map_err(|source| ConfigError::CreateDir {
        path: logs.clone(),
        source,
    })?;
    Ok(logs)
}
