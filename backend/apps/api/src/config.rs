//! Server Configuration
//!
//! Read once from the environment (and `.env`) at startup.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail, ensure};
use auth::AuthConfig;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose;
use i18n::I18nConfig;
use training::TrainingConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

pub struct ApiConfig {
    /// PostgreSQL; in-memory storage when unset
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
    pub i18n: I18nConfig,
    pub training: TrainingConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL");

        let bind_addr: SocketAddr = var("BIND_ADDR")
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = parse_origins(
            var("FRONTEND_ORIGINS")
                .as_deref()
                .unwrap_or(DEFAULT_FRONTEND_ORIGINS),
        );

        let cookie_secure = match var("COOKIE_SECURE") {
            Some(value) => parse_bool(&value).context("COOKIE_SECURE must be true or false")?,
            None => !cfg!(debug_assertions),
        };

        let mut auth = match var("SESSION_SECRET") {
            Some(secret) => AuthConfig {
                session_secret: decode_secret(&secret)?,
                ..AuthConfig::default()
            },
            None if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
                AuthConfig::with_random_secret()
            }
            None => bail!("SESSION_SECRET must be set in production"),
        };
        auth.cookie_secure = cookie_secure;
        auth.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);
        if let Some(hours) = var("SESSION_TTL_HOURS") {
            let hours: u64 = hours
                .parse()
                .context("SESSION_TTL_HOURS must be a whole number")?;
            ensure!(hours > 0, "SESSION_TTL_HOURS must be positive");
            auth.session_ttl = Duration::from_secs(hours * 3600);
        }

        let training = match var("CERTIFICATE_ISSUER") {
            Some(issuer) => TrainingConfig::default().with_issuer(issuer),
            None => TrainingConfig::default(),
        };

        Ok(Self {
            database_url,
            bind_addr,
            frontend_origins,
            auth,
            i18n: I18nConfig::default().with_cookie_secure(cookie_secure),
            training,
        })
    }
}

/// Set and non-blank
fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_origins(value: &str) -> Vec<HeaderValue> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Base64 (standard alphabet) of exactly 32 bytes
fn decode_secret(value: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(value.trim())
        .context("SESSION_SECRET must be base64")?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", bytes.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" http://localhost:40922 ,, https://training.example.com");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://training.example.com");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_decode_secret() {
        let encoded = general_purpose::STANDARD.encode([7u8; 32]);
        assert_eq!(decode_secret(&encoded).unwrap(), [7u8; 32]);

        let short = general_purpose::STANDARD.encode([7u8; 16]);
        assert!(decode_secret(&short).is_err());
        assert!(decode_secret("not base64!").is_err());
    }
}
