pub mod config_service;
pub mod paths;
pub mod secret_service;
pub mod session_store;

pub use config_service::ConfigService;
pub use paths::ArtlensPaths;
pub use secret_service::SecretServiceImpl;
pub use session_store::MemorySessionStore;
