use std::sync::Arc;

use artlens_core::auth::{CredentialGate, SessionStore};
use artlens_core::capture::CaptureController;
use artlens_core::secret::SecretService;
use artlens_infrastructure::ConfigService;
use tokio::sync::Mutex;

/// Application state shared across Tauri commands.
pub struct AppState {
    pub credential_gate: Arc<CredentialGate>,
    /// The capture state machine; one lock serializes all view transitions.
    pub capture: Mutex<CaptureController>,
    pub session_store: Arc<dyn SessionStore>,
    pub secret_service: Arc<dyn SecretService>,
    pub config_service: Arc<ConfigService>,
}
