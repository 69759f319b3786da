//! Check Session Use Case
//!
//! Resolves a session cookie into the signed-in [`Principal`].

use std::sync::Arc;

use kernel::principal::Principal;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthRepository;
use crate::error::{AuthError, AuthResult};

#[derive(Debug)]
pub struct SessionOutput {
    pub principal: Principal,
    pub expires_at_ms: i64,
    /// The expiry slid forward, so the cookie needs a fresh Max-Age
    pub extended: bool,
}

pub struct CheckSessionUseCase<R: AuthRepository> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AuthRepository> CheckSessionUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AuthResult<SessionOutput> {
        let (session, extended) = self.get_session(session_token, fingerprint_hash).await?;

        let user = self
            .repo
            .find_user_by_id(&session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        Ok(SessionOutput {
            principal: user.to_principal(),
            expires_at_ms: session.expires_at_ms,
            extended,
        })
    }

    /// Verify the token, load the session and refresh its activity
    async fn get_session(
        &self,
        session_token: &str,
        fingerprint_hash: &[u8],
    ) -> AuthResult<(AuthSession, bool)> {
        let session_id = self
            .config
            .parse_token(session_token)
            .ok_or(AuthError::SessionInvalid)?;

        let mut session = self
            .repo
            .find_session(&session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.repo.delete_session(&session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        if session.client_fingerprint_hash != fingerprint_hash {
            return Err(AuthError::SessionFingerprintMismatch);
        }

        session.touch();
        let extended = session.extend_if_needed(self.config.session_ttl_chrono());

        // Update in background
        let repo = Arc::clone(&self.repo);
        let session_clone = session.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.touch_session(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok((session, extended))
    }
}
