//! Configuration types loaded once at startup.

use serde::{Deserialize, Serialize};

/// SHA-256 digest of the placeholder password `password`.
///
/// Development fallback only; any real deployment must override it in
/// `config.toml`. The digest is reachable by anyone with access to the
/// machine, so the gate is deterrence, not a security boundary.
pub const DEFAULT_PASSWORD_DIGEST_HEX: &str =
    "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub auth: AuthConfig,
}

/// The credential reference the gate compares submissions against.
///
/// The password is stored only as a lowercase-hex SHA-256 digest of the
/// plaintext; comparison is exact hex-string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password_digest_hex: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password_digest_hex: DEFAULT_PASSWORD_DIGEST_HEX.to_string(),
        }
    }
}

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}
