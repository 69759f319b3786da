//! Auth Middleware
//!
//! Resolves the session cookie into a [`Principal`](kernel::principal::Principal)
//! request extension.
//! Feature crates read the extension; this layer never rejects a request.
//! When the session's expiry slides forward the cookie is sent again so the
//! browser keeps it as long as the server does.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{extract_client_ip, extract_fingerprint};
use platform::cookie::extract_cookie;

use crate::application::{CheckSessionUseCase, SessionOutput};
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthRepository;
use crate::error::AuthError;

/// Middleware state
pub struct AuthMiddlewareState<R: AuthRepository> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R: AuthRepository> Clone for AuthMiddlewareState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Attach the signed-in participant when the request carries a valid session
pub async fn resolve_session<R: AuthRepository>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request,
    next: Next,
) -> Response {
    let mut refreshed_token = None;
    if let Some((token, fingerprint_hash)) = session_credentials(&state.config, &req) {
        if let Some(output) = check_session(&state, &token, &fingerprint_hash).await {
            req.extensions_mut().insert(output.principal);
            if output.extended {
                refreshed_token = Some(token);
            }
        }
    }

    let mut response = next.run(req).await;
    if let Some(token) = refreshed_token {
        reissue_cookie(&state.config, &mut response, &token);
    }
    response
}

/// Send the session cookie again, unless the handler already set or cleared it
fn reissue_cookie(config: &AuthConfig, response: &mut Response, token: &str) {
    let prefix = format!("{}=", config.session_cookie_name);
    let handled = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .any(|value| value.to_str().is_ok_and(|value| value.starts_with(&prefix)));
    if handled {
        return;
    }

    if let Some(cookie) = config.session_cookie().set_cookie_header(token) {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
}

/// Session cookie and client fingerprint hash, when both are present
fn session_credentials(config: &AuthConfig, req: &Request) -> Option<(String, [u8; 32])> {
    let headers = req.headers();
    let token = extract_cookie(headers, &config.session_cookie_name)?;

    let client_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());
    let fingerprint = extract_fingerprint(headers, extract_client_ip(headers, client_ip)).ok()?;

    Some((token, fingerprint.hash))
}

async fn check_session<R: AuthRepository>(
    state: &AuthMiddlewareState<R>,
    token: &str,
    fingerprint_hash: &[u8],
) -> Option<SessionOutput> {
    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
    match use_case.execute(token, fingerprint_hash).await {
        Ok(output) => Some(output),
        Err(AuthError::SessionFingerprintMismatch) => {
            tracing::warn!("Session cookie presented by a different client");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "Session not resolved");
            None
        }
    }
}
