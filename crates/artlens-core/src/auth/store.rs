//! Session store contract.
//!
//! The authenticated flag and its timestamp live in a session-scoped
//! key/value store owned by the host, not in the gate itself. The gate only
//! sees this trait, so tests can inject an in-memory fake.

/// Store key for the authenticated flag (`"true"` when set).
pub const AUTHENTICATED_KEY: &str = "artlens_authenticated";

/// Store key for the establishment time, an epoch-millisecond string.
pub const AUTH_TIME_KEY: &str = "artlens_auth_time";

/// Session-scoped key/value storage.
///
/// Contents are expected to survive only the current app run; nothing here
/// is a durable record.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: &str, value: String);

    async fn remove(&self, key: &str);
}
