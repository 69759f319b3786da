//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AuthRepository;
use crate::error::AuthResult;

pub struct SignOutUseCase<R: AuthRepository> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AuthRepository> SignOutUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    /// Delete the session behind `session_token`.
    ///
    /// A missing or forged token is not an error: the cookie is cleared either way.
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<()> {
        let Some(session_id) = session_token.and_then(|token| self.config.parse_token(token))
        else {
            return Ok(());
        };

        self.repo.delete_session(&session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
