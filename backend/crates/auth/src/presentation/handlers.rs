//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use i18n::{Locale, LocalizeResult, Localized};
use platform::client::{ClientFingerprint, FingerprintError};
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase,
    SignOutUseCase,
};
use crate::domain::repository::AuthRepository;
use crate::error::AuthError;
use crate::presentation::dto::{
    RegisterRequest, RegisterResponse, SessionStatusResponse, SignInRequest, SignInResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R: AuthRepository> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R: AuthRepository> Clone for AuthAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/user
pub async fn register<R: AuthRepository>(
    State(state): State<AuthAppState<R>>,
    locale: Locale,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, Localized<AuthError>> {
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        email: req.email,
        company_name: req.company_name,
        password: req.password,
        confirm_password: req.confirm_password,
    };

    let output = use_case.execute(input).await.localize(locale)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            public_id: output.public_id,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R: AuthRepository>(
    State(state): State<AuthAppState<R>>,
    locale: Locale,
    fingerprint: Result<ClientFingerprint, FingerprintError>,
    Json(req): Json<SignInRequest>,
) -> Result<impl IntoResponse, Localized<AuthError>> {
    let fingerprint = fingerprint.map_err(AuthError::from).localize(locale)?;

    let use_case = SignInUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input, fingerprint).await.localize(locale)?;

    let mut headers = HeaderMap::new();
    if let Some(cookie) = state
        .config
        .session_cookie()
        .set_cookie_header(&output.session_token)
    {
        headers.insert(header::SET_COOKIE, cookie);
    }

    Ok((
        StatusCode::OK,
        headers,
        Json(SignInResponse {
            ok: true,
            url: state.config.post_sign_in_url.clone(),
            public_id: output.public_id,
            expires_at_ms: output.expires_at_ms,
        }),
    ))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<R: AuthRepository>(
    State(state): State<AuthAppState<R>>,
    locale: Locale,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Localized<AuthError>> {
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = SignOutUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(token.as_deref()).await.localize(locale)?;

    let mut response_headers = HeaderMap::new();
    if let Some(cookie) = state.config.session_cookie().delete_cookie_header() {
        response_headers.insert(header::SET_COOKIE, cookie);
    }

    Ok((StatusCode::NO_CONTENT, response_headers))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/session
pub async fn session_status<R: AuthRepository>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
    fingerprint: Result<ClientFingerprint, FingerprintError>,
) -> Json<SessionStatusResponse> {
    let (Some(token), Ok(fingerprint)) = (
        extract_cookie(&headers, &state.config.session_cookie_name),
        fingerprint,
    ) else {
        return Json(SessionStatusResponse::anonymous());
    };

    let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(&token, &fingerprint.hash).await {
        Ok(output) => Json(SessionStatusResponse {
            authenticated: true,
            user: Some(output.principal),
            expires_at_ms: Some(output.expires_at_ms),
        }),
        Err(e) => {
            tracing::debug!(error = %e, "Session not resolved");
            Json(SessionStatusResponse::anonymous())
        }
    }
}
