//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/artlens/config.toml` and
//! caches it; the auth reference is read once at startup and immutable
//! thereafter.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use artlens_core::config::RootConfig;

use crate::paths::ArtlensPaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file is created with default values on first load so the user
/// has something to edit. The defaults include the placeholder credential
/// digest and must be overridden for any real deployment.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file path, or `None` for the platform default.
    config_path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading from the platform default path.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new() -> Self {
        Self {
            config_path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading from an explicit file path.
    pub fn with_file(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            tracing::warn!("[Config] Falling back to defaults: {}", err);
            RootConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn resolve_path(&self) -> Result<PathBuf, String> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => ArtlensPaths::config_file().map_err(|e| e.to_string()),
        }
    }

    fn load_config(&self) -> Result<RootConfig, String> {
        let config_path = self.resolve_path()?;

        if !config_path.exists() {
            let default_config = RootConfig::default();
            let content = toml::to_string_pretty(&default_config)
                .map_err(|e| format!("Failed to serialize default config: {e}"))?;
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create config directory: {e}"))?;
            }
            fs::write(&config_path, content)
                .map_err(|e| format!("Failed to write default config: {e}"))?;
            tracing::info!(
                "[Config] Created default config at {}",
                config_path.display()
            );
            return Ok(default_config);
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            format!(
                "Failed to read configuration file at {}: {}",
                config_path.display(),
                e
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            format!(
                "Failed to parse configuration file at {}: {}",
                config_path.display(),
                e
            )
        })
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
