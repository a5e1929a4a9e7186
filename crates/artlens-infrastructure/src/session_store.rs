//! In-memory session store.
//!
//! The authenticated flag lives only for the current app run, mirroring the
//! session-scoped storage semantics of the host: nothing survives a
//! restart, and there is no on-disk record of the session.

use std::collections::HashMap;

use artlens_core::auth::SessionStore;
use tokio::sync::RwLock;

/// Process-lifetime key/value store backing the credential gate.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.write().await.insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove_round_trip() {
        let store = MemorySessionStore::new();

        assert!(store.get("artlens_authenticated").await.is_none());

        store
            .set("artlens_authenticated", "true".to_string())
            .await;
        assert_eq!(
            store.get("artlens_authenticated").await.as_deref(),
            Some("true")
        );

        store.remove("artlens_authenticated").await;
        assert!(store.get("artlens_authenticated").await.is_none());
    }
}
