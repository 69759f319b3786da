//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use i18n::ValidationErrors;
use platform::client::ClientFingerprint;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::AuthRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub public_id: String,
    pub expires_at_ms: i64,
}

pub struct SignInUseCase<R: AuthRepository> {
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R: AuthRepository> SignInUseCase<R> {
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        input: SignInInput,
        fingerprint: ClientFingerprint,
    ) -> AuthResult<SignInOutput> {
        let mut errors = ValidationErrors::new();
        let email = errors.check("email", Email::new(&input.email));
        let password = errors.check("password", RawPassword::for_sign_in(input.password));
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::Validation(errors));
        };

        let mut user = self
            .repo
            .find_user_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let mut credentials = self
            .repo
            .find_credentials(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credentials not found".to_string()))?;

        if credentials.is_locked() {
            return Err(AuthError::AccountLocked {
                minutes: credentials.locked_minutes_remaining(),
            });
        }

        if !credentials
            .password_hash
            .verify(&password, self.config.pepper())
        {
            credentials.record_failure();
            self.repo.update_credentials(&credentials).await?;

            tracing::info!(
                public_id = %user.public_id,
                failures = credentials.login_failed_count,
                locked = credentials.is_locked(),
                "Sign-in failed"
            );
            return Err(AuthError::InvalidCredentials);
        }

        if credentials.login_failed_count > 0 || credentials.locked_until.is_some() {
            credentials.reset_failures();
            self.repo.update_credentials(&credentials).await?;
        }

        user.record_login();
        self.repo.update_user(&user).await?;

        let session = AuthSession::new(
            user.user_id,
            fingerprint.hash_vec(),
            fingerprint.ip_string(),
            fingerprint.user_agent.clone(),
            self.config.session_ttl_chrono(),
        );
        self.repo.insert_session(&session).await?;

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token: self.config.issue_token(&session.session_id),
            public_id: user.public_id.to_string(),
            expires_at_ms: session.expires_at_ms,
        })
    }
}
