pub mod art_query_agent;
pub mod classify;

pub use art_query_agent::GeminiArtAgent;
pub use classify::{DEFAULT_ACTIVATION_URL, FaultDetail, ServiceFault, classify};
