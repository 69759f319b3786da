//! Client identification
//!
//! Sessions are bound to the User-Agent that created them. [`ClientFingerprint`]
//! is an axum extractor, so handlers simply take it as an argument.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::crypto::sha256;

/// Client fingerprint derived from request headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientFingerprint {
    /// SHA-256 of the User-Agent header
    pub hash: [u8; 32],
    /// Client IP (X-Forwarded-For first, then the socket peer)
    pub ip: Option<IpAddr>,
    pub user_agent: Option<String>,
}

impl ClientFingerprint {
    pub fn new(hash: [u8; 32], ip: Option<IpAddr>, user_agent: Option<String>) -> Self {
        Self {
            hash,
            ip,
            user_agent,
        }
    }

    pub fn hash_vec(&self) -> Vec<u8> {
        self.hash.to_vec()
    }

    pub fn ip_string(&self) -> Option<String> {
        self.ip.map(|ip| ip.to_string())
    }

    /// Whether a stored fingerprint hash belongs to this client
    pub fn matches(&self, stored: &[u8]) -> bool {
        self.hash.as_slice() == stored
    }
}

/// Error when extracting client fingerprint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FingerprintError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),
}

impl From<FingerprintError> for AppError {
    fn from(err: FingerprintError) -> Self {
        AppError::bad_request(err.to_string()).with_action("Retry from a regular browser")
    }
}

impl IntoResponse for FingerprintError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Fingerprint the client from its User-Agent header
pub fn extract_fingerprint(
    headers: &HeaderMap,
    client_ip: Option<IpAddr>,
) -> Result<ClientFingerprint, FingerprintError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .filter(|ua| !ua.trim().is_empty())
        .ok_or(FingerprintError::MissingHeader("User-Agent"))?;

    Ok(ClientFingerprint::new(
        sha256(user_agent.as_bytes()),
        client_ip,
        Some(user_agent.to_string()),
    ))
}

/// Client IP: first valid X-Forwarded-For entry, else the direct peer
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}

impl<S> FromRequestParts<S> for ClientFingerprint
where
    S: Send + Sync,
{
    type Rejection = FingerprintError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Absent when the router is driven without `into_make_service_with_connect_info`
        let direct_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        let ip = extract_client_ip(&parts.headers, direct_ip);
        extract_fingerprint(&parts.headers, ip)
    }
}
