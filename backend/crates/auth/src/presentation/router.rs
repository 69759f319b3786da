//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::AuthConfig;
use crate::domain::repository::AuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Routes relative to the API root:
/// `/user`, `/auth/signin`, `/auth/signout`, `/auth/session`
pub fn auth_router<R: AuthRepository>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router {
    let state = AuthAppState { repo, config };

    Router::new()
        .route("/user", post(handlers::register::<R>))
        .route("/auth/signin", post(handlers::sign_in::<R>))
        .route("/auth/signout", post(handlers::sign_out::<R>))
        .route("/auth/session", get(handlers::session_status::<R>))
        .with_state(state)
}
