//! Time-boxed authenticated session state.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// How long a session stays valid after it is established.
const SESSION_TTL_HOURS: i64 = 24;

/// An authenticated session, held locally after a successful credential
/// check.
///
/// Exactly one session exists per app run; it is not persisted across
/// restarts. Expiry is evaluated lazily on each check, never by a timer, and
/// is independent of the camera lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session established at the current instant.
    pub fn established_now() -> Self {
        Self {
            established_at: Utc::now(),
        }
    }

    /// Restores a session from the stored epoch-millisecond timestamp.
    ///
    /// Returns `None` for timestamps outside the representable range.
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|established_at| Self { established_at })
    }

    /// The establishment instant as epoch milliseconds, the wire form used
    /// by the session store.
    pub fn epoch_millis(&self) -> i64 {
        self.established_at.timestamp_millis()
    }

    /// Whether the session is still valid at `now`.
    ///
    /// Valid at exactly the TTL boundary, invalid one millisecond past it.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.established_at) <= Duration::hours(SESSION_TTL_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_at(millis: i64) -> Session {
        Session::from_epoch_millis(millis).unwrap()
    }

    #[test]
    fn test_valid_immediately_after_establishment() {
        let session = session_at(1_000_000);
        assert!(session.is_valid_at(session.established_at));
    }

    #[test]
    fn test_validity_around_the_ttl_boundary() {
        let session = session_at(0);
        let ttl_millis = 24 * 60 * 60 * 1000;

        let just_before = Utc.timestamp_millis_opt(ttl_millis - 1).unwrap();
        let exactly = Utc.timestamp_millis_opt(ttl_millis).unwrap();
        let just_after = Utc.timestamp_millis_opt(ttl_millis + 1).unwrap();

        assert!(session.is_valid_at(just_before));
        assert!(session.is_valid_at(exactly));
        assert!(!session.is_valid_at(just_after));
    }

    #[test]
    fn test_epoch_millis_round_trip() {
        let session = session_at(1_723_000_000_123);
        assert_eq!(session.epoch_millis(), 1_723_000_000_123);
        assert_eq!(session_at(session.epoch_millis()), session);
    }
}
