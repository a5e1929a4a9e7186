pub mod gate;
pub mod session;
pub mod store;

pub use gate::{CredentialGate, password_digest_hex};
pub use session::Session;
pub use store::{AUTH_TIME_KEY, AUTHENTICATED_KEY, SessionStore};
