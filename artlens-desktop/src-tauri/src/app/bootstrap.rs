use std::sync::Arc;

use artlens_core::auth::{CredentialGate, SessionStore};
use artlens_core::capture::CaptureController;
use artlens_core::secret::SecretService;
use artlens_infrastructure::{ConfigService, MemorySessionStore, SecretServiceImpl};
use tokio::sync::Mutex;

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
}

/// Composition root: creates the concrete service instances and wires them
/// into the shared [`AppState`].
pub async fn bootstrap() -> AppBootstrap {
    // Initialize ConfigService and ensure config.toml exists by loading the
    // auth reference once.
    let config_service = Arc::new(ConfigService::new());
    let auth_reference = config_service.get_config().auth;
    tracing::info!(
        "[Bootstrap] Auth reference loaded for user '{}'",
        auth_reference.username
    );

    // Initialize SecretService and ensure secret.json exists
    let secret_service_impl =
        SecretServiceImpl::new_default().expect("Failed to initialize secret service");
    let _ = secret_service_impl.load_secrets().await; // Trigger file creation if missing
    let secret_service: Arc<dyn SecretService> = Arc::new(secret_service_impl);

    // The session lives in process memory only; closing the app ends it.
    let session_store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

    let credential_gate = Arc::new(CredentialGate::new(auth_reference, session_store.clone()));

    AppBootstrap {
        app_state: AppState {
            credential_gate,
            capture: Mutex::new(CaptureController::new()),
            session_store,
            secret_service,
            config_service,
        },
    }
}
