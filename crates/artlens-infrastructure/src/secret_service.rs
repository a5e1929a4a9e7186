//! Secret service implementation.
//!
//! Reads the secret configuration (API keys) from secret.json, creating the
//! file with an empty skeleton when missing so the user has a place to put
//! the key.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use anyhow::Result;
use artlens_core::config::SecretConfig;
use artlens_core::secret::SecretService;

use crate::paths::ArtlensPaths;

/// Service for managing secret configuration.
///
/// This implementation reads secret configuration from disk and caches it to
/// avoid repeated file I/O operations. Error messages never include the
/// secrets themselves.
#[derive(Clone)]
pub struct SecretServiceImpl {
    secret_path: PathBuf,
    /// Cached secret config loaded from storage.
    /// Uses RwLock for thread-safe lazy loading.
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    /// Creates a service at the platform default secret path.
    pub fn new_default() -> Result<Self> {
        let path = ArtlensPaths::secret_file()
            .map_err(|e| anyhow::anyhow!("Failed to get secret path: {}", e))?;
        Ok(Self::new(&path))
    }

    /// Creates a service reading from an explicit file path.
    pub fn new(path: &Path) -> Self {
        Self {
            secret_path: path.to_path_buf(),
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    /// Loads the secrets from storage if not already cached.
    fn load_secrets_internal(&self) -> Result<SecretConfig, String> {
        {
            let read_lock = self.secrets.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = if self.secret_path.exists() {
            let content = fs::read_to_string(&self.secret_path).map_err(|e| {
                format!(
                    "Failed to read secret file at {}: {}",
                    self.secret_path.display(),
                    e
                )
            })?;
            serde_json::from_str(&content).map_err(|e| {
                format!(
                    "Failed to parse secret file at {}: {}",
                    self.secret_path.display(),
                    e
                )
            })?
        } else {
            let default_config = SecretConfig::default();
            let content = serde_json::to_string_pretty(&default_config)
                .map_err(|e| format!("Failed to serialize default secrets: {e}"))?;
            if let Some(parent) = self.secret_path.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create secret directory: {e}"))?;
            }
            fs::write(&self.secret_path, content)
                .map_err(|e| format!("Failed to write default secret file: {e}"))?;
            tracing::info!(
                "[Secret] Created empty secret file at {}",
                self.secret_path.display()
            );
            default_config
        };

        {
            let mut write_lock = self.secrets.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig, String> {
        self.load_secrets_internal()
    }

    async fn secret_file_exists(&self) -> bool {
        self.secret_path.exists()
    }
}
