//! Auth Error Types
//!
//! Auth-specific error variants. They are rendered through
//! [`i18n::LocalizedError`], so `detail` and field messages reach the client
//! in the request locale.

use i18n::{LocalizedError, Translator, ValidationErrors};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::FingerprintError;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// One or more request fields are invalid
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Too many failed attempts
    #[error("Account is locked for {minutes} more minutes")]
    AccountLocked { minutes: i64 },

    /// Session missing, expired, tampered or revoked
    #[error("Session not found or expired")]
    SessionInvalid,

    #[error("Session fingerprint mismatch")]
    SessionFingerprintMismatch,

    #[error(transparent)]
    Fingerprint(#[from] FingerprintError),

    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::SessionInvalid
            | AuthError::SessionFingerprintMismatch => ErrorKind::Unauthorized,
            AuthError::AccountLocked { .. } => ErrorKind::Locked,
            AuthError::Fingerprint(_) => ErrorKind::BadRequest,
            AuthError::Database(e) => ErrorKind::of_sqlx(e),
            AuthError::PasswordHash(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }
}

impl LocalizedError for AuthError {
    fn to_app_error(&self, t: &Translator) -> AppError {
        match self {
            AuthError::Validation(errors) => AppError::validation(
                t.t("common.errors.validation"),
                errors.to_field_errors(t),
            ),
            AuthError::EmailTaken => {
                let message = t.t("auth.errors.emailTaken");
                let mut fields = kernel::error::validation::FieldErrors::new();
                fields.add("email", message.clone());
                AppError::new(self.kind(), message)
                    .with_fields(fields)
                    .with_action(t.t("auth.loginHere"))
            }
            AuthError::InvalidCredentials => {
                AppError::new(self.kind(), t.t("auth.errors.authFailed"))
            }
            AuthError::AccountLocked { minutes } => AppError::new(
                self.kind(),
                t.t_with("auth.errors.accountLocked", &[("minutes", &minutes.to_string())]),
            ),
            AuthError::SessionInvalid | AuthError::SessionFingerprintMismatch => {
                AppError::new(self.kind(), t.t("auth.errors.sessionRequired"))
            }
            AuthError::Fingerprint(FingerprintError::MissingHeader(header)) => AppError::new(
                self.kind(),
                t.t_with("auth.errors.clientHeader", &[("header", header)]),
            ),
            AuthError::Database(_) if self.kind() == ErrorKind::ServiceUnavailable => {
                AppError::new(self.kind(), t.t("common.errors.unavailable"))
            }
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), t.t("common.errors.internal"))
            }
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountLocked { minutes } => {
                tracing::warn!(minutes, "Login attempt on locked account");
            }
            AuthError::SessionFingerprintMismatch => {
                tracing::warn!("Session fingerprint mismatch detected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::{Locale, Message};

    #[test]
    fn test_status_codes() {
        let fr = Translator::new(Locale::Fr);
        assert_eq!(AuthError::EmailTaken.to_app_error(&fr).status_code(), 409);
        assert_eq!(AuthError::InvalidCredentials.to_app_error(&fr).status_code(), 401);
        assert_eq!(
            AuthError::AccountLocked { minutes: 15 }.to_app_error(&fr).status_code(),
            423
        );
        assert_eq!(AuthError::SessionInvalid.to_app_error(&fr).status_code(), 401);
        assert_eq!(
            AuthError::Internal("boom".into()).to_app_error(&fr).status_code(),
            500
        );
    }

    #[test]
    fn test_validation_is_localized_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("password", Message::new("auth.errors.passwordMin").with("min", 8));

        let app = AuthError::Validation(errors).to_app_error(&Translator::new(Locale::Es));
        assert_eq!(app.status_code(), 422);
        assert_eq!(
            app.fields().get("password"),
            Some("La contraseña debe tener al menos 8 caracteres")
        );
    }

    #[test]
    fn test_lockout_message_carries_minutes() {
        let app = AuthError::AccountLocked { minutes: 7 }.to_app_error(&Translator::new(Locale::Fr));
        assert_eq!(
            app.message(),
            "Trop de tentatives échouées. Réessayez dans 7 minutes."
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let app = AuthError::Internal("pool exhausted".into()).to_app_error(&Translator::new(Locale::Fr));
        assert!(!app.message().contains("pool"));
    }
}
