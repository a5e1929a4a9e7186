//! Unified path management for artlens configuration files.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for artlens.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/artlens/           # Config directory
/// ├── config.toml              # Auth reference and app configuration
/// ├── secret.json              # API keys
/// └── logs/                    # Application logs
///     └── artlens-desktop.log.YYYY-MM-DD
/// ```
pub struct ArtlensPaths;

impl ArtlensPaths {
    /// Returns the artlens configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("artlens"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file (`config.toml`).
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secret file (`secret.json`).
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the application log directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }
}
