//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use kernel::id::SessionId;
use platform::cookie::CookieConfig;
use platform::crypto::{random_secret, sign_token, verify_token};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime, slid forward on activity
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Where the client goes after signing in
    pub post_sign_in_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "auth_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
            post_sign_in_url: "/dashboard".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        Self {
            session_secret: random_secret(),
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::hours(12))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Session cookie living as long as a fresh session
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            ..CookieConfig::session(self.session_cookie_name.clone())
        }
        .with_max_age(i64::try_from(self.session_ttl.as_secs()).unwrap_or(i64::MAX))
    }

    /// Signed cookie value for a session
    pub fn issue_token(&self, session_id: &SessionId) -> String {
        sign_token(&self.session_secret, &session_id.to_string())
    }

    /// Session id from a cookie value, if the signature holds
    pub fn parse_token(&self, token: &str) -> Option<SessionId> {
        verify_token(&self.session_secret, token)?.parse().ok()
    }
}
