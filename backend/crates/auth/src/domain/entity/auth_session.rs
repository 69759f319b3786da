//! Auth Session Entity
//!
//! Server-side session referenced by the signed session cookie.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// SHA-256 of user agent and IP at sign-in
    pub client_fingerprint_hash: Vec<u8>,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(
        user_id: UserId,
        fingerprint_hash: Vec<u8>,
        client_ip: Option<String>,
        user_agent: Option<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            client_fingerprint_hash: fingerprint_hash,
            client_ip,
            user_agent,
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    pub fn remaining_ms(&self) -> i64 {
        (self.expires_at_ms - Utc::now().timestamp_millis()).max(0)
    }

    /// Slide the expiry to `now + ttl` once less than half of `ttl` remains.
    ///
    /// Returns whether the expiry moved.
    pub fn extend_if_needed(&mut self, ttl: Duration) -> bool {
        let now = Utc::now();
        if self.expires_at_ms < (now + ttl / 2).timestamp_millis() {
            self.expires_at_ms = (now + ttl).timestamp_millis();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(ttl: Duration) -> AuthSession {
        AuthSession::new(
            UserId::new(),
            vec![0u8; 32],
            Some("127.0.0.1".to_string()),
            Some("test-agent".to_string()),
            ttl,
        )
    }

    #[test]
    fn test_new_session_not_expired() {
        let session = session(Duration::hours(12));
        assert!(!session.is_expired());
        assert!(session.remaining_ms() > Duration::hours(11).num_milliseconds());
    }

    #[test]
    fn test_expired_session() {
        let mut session = session(Duration::hours(1));
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;
        assert!(session.is_expired());
        assert_eq!(session.remaining_ms(), 0);
    }

    #[test]
    fn test_extend_only_past_half_life() {
        let ttl = Duration::hours(12);
        let mut fresh = session(ttl);
        let before = fresh.expires_at_ms;
        assert!(!fresh.extend_if_needed(ttl));
        assert_eq!(fresh.expires_at_ms, before);

        let mut aging = session(ttl);
        aging.expires_at_ms = (Utc::now() + Duration::hours(2)).timestamp_millis();
        assert!(aging.extend_if_needed(ttl));
        assert!(aging.remaining_ms() > Duration::hours(11).num_milliseconds());
    }
}
