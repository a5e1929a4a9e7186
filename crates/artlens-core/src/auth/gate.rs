//! Credential gate.
//!
//! Verifies a submitted username/password pair against the configured
//! reference and establishes the session on success. The reference password
//! exists only as a SHA-256 digest; the submission is digested the same way
//! before comparison.

use std::sync::Arc;

use sha2::{Digest, Sha256};

use crate::auth::session::Session;
use crate::auth::store::{AUTH_TIME_KEY, AUTHENTICATED_KEY, SessionStore};
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Lowercase-hex SHA-256 digest of a password.
pub fn password_digest_hex(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Gate in front of the capture flow.
///
/// There is no lockout or throttle; a failed check may be retried
/// immediately. A production deployment would want one.
pub struct CredentialGate {
    reference: AuthConfig,
    store: Arc<dyn SessionStore>,
}

impl CredentialGate {
    pub fn new(reference: AuthConfig, store: Arc<dyn SessionStore>) -> Self {
        Self { reference, store }
    }

    /// Checks the submitted pair and establishes a session on success.
    ///
    /// Both failure causes (wrong username, wrong password) produce the same
    /// opaque [`AuthError::InvalidCredentials`], so the response never
    /// reveals which half was wrong.
    pub async fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let digest = password_digest_hex(password);
        if username != self.reference.username || digest != self.reference.password_digest_hex {
            tracing::info!("[Auth] Rejected credential submission");
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::established_now();
        self.store
            .set(AUTHENTICATED_KEY, "true".to_string())
            .await;
        self.store
            .set(AUTH_TIME_KEY, session.epoch_millis().to_string())
            .await;
        tracing::info!("[Auth] Session established");
        Ok(())
    }

    /// Reads the session back from the store, if one was established.
    pub async fn session(&self) -> Option<Session> {
        if self.store.get(AUTHENTICATED_KEY).await? != "true" {
            return None;
        }
        let millis = self.store.get(AUTH_TIME_KEY).await?.parse::<i64>().ok()?;
        Session::from_epoch_millis(millis)
    }

    /// Whether a valid session exists right now.
    ///
    /// Expiry is evaluated lazily here; a session found to be expired is
    /// cleared from the store as a side effect.
    pub async fn is_session_valid(&self) -> bool {
        match self.session().await {
            Some(session) if session.is_valid_at(chrono::Utc::now()) => true,
            Some(_) => {
                tracing::info!("[Auth] Session expired, clearing");
                self.clear_session().await;
                false
            }
            None => false,
        }
    }

    /// Removes the session from the store.
    pub async fn clear_session(&self) {
        self.store.remove(AUTHENTICATED_KEY).await;
        self.store.remove(AUTH_TIME_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mock SessionStore for testing
    #[derive(Default)]
    struct MockSessionStore {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait::async_trait]
    impl SessionStore for MockSessionStore {
        async fn get(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }

        async fn set(&self, key: &str, value: String) {
            self.entries.lock().unwrap().insert(key.to_string(), value);
        }

        async fn remove(&self, key: &str) {
            self.entries.lock().unwrap().remove(key);
        }
    }

    fn gate_with_store() -> (CredentialGate, Arc<MockSessionStore>) {
        let store = Arc::new(MockSessionStore::default());
        let reference = AuthConfig {
            username: "curator".to_string(),
            password_digest_hex: password_digest_hex("open-sesame"),
        };
        (CredentialGate::new(reference, store.clone()), store)
    }

    #[test]
    fn test_digest_matches_known_vector() {
        // SHA-256("password"), the documented development fallback.
        assert_eq!(
            password_digest_hex("password"),
            crate::config::DEFAULT_PASSWORD_DIGEST_HEX
        );
    }

    #[tokio::test]
    async fn test_verify_success_establishes_session() {
        let (gate, _store) = gate_with_store();
        let before = chrono::Utc::now();

        gate.verify("curator", "open-sesame").await.unwrap();

        let session = gate.session().await.expect("session should exist");
        let after = chrono::Utc::now();
        assert!(session.established_at >= before - chrono::Duration::milliseconds(1));
        assert!(session.established_at <= after);
        assert!(gate.is_session_valid().await);
    }

    #[tokio::test]
    async fn test_wrong_halves_are_not_distinguishable() {
        let (gate, _store) = gate_with_store();

        let wrong_user = gate.verify("stranger", "open-sesame").await.unwrap_err();
        let wrong_password = gate.verify("curator", "guess").await.unwrap_err();

        assert_eq!(wrong_user, wrong_password);
        assert_eq!(wrong_user.to_string(), wrong_password.to_string());
        assert!(gate.session().await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_cleared_from_store() {
        let (gate, store) = gate_with_store();
        let stale = chrono::Utc::now() - chrono::Duration::hours(25);
        store
            .set(AUTHENTICATED_KEY, "true".to_string())
            .await;
        store
            .set(AUTH_TIME_KEY, stale.timestamp_millis().to_string())
            .await;

        assert!(!gate.is_session_valid().await);
        assert!(store.get(AUTHENTICATED_KEY).await.is_none());
        assert!(store.get(AUTH_TIME_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_no_session_is_invalid_without_clearing() {
        let (gate, _store) = gate_with_store();
        assert!(!gate.is_session_valid().await);
    }
}
