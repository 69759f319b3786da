//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use super::validation::FieldErrors;

/// Unified application error
///
/// Every crate-specific error converts into this type before it reaches the
/// wire. Built with a small builder API.
///
/// ## Fields
/// * `kind` - classification, mapped to an HTTP status
/// * `message` - user-facing message (already localized when produced by a handler)
/// * `action` - what the user should do next (optional)
/// * `fields` - per-field validation messages (optional)
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Certificate not issued yet");
///
/// let err = AppError::bad_request("Unsupported locale")
///     .with_action("Use one of: fr, es");
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    fields: FieldErrors,
}

/// `Result<T, AppError>`
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn parse_answer(raw: &str) -> AppResult<usize> {
///     raw.parse()
///         .map_err(|_| AppError::bad_request("Answer must be an index"))
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            fields: FieldErrors::new(),
        }
    }

    /// 400 Bad Request
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 422 with per-field messages
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>, fields: FieldErrors) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message).with_fields(fields)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[inline]
    pub fn with_fields(mut self, fields: FieldErrors) -> Self {
        self.fields = fields;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    #[inline]
    pub fn fields(&self) -> &FieldErrors {
        &self.fields
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if !self.fields.is_empty() {
            builder.field("fields", &self.fields);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::Locked, "Account locked");
        assert_eq!(err.kind(), ErrorKind::Locked);
        assert_eq!(err.status_code(), 423);
        assert_eq!(err.message(), "Account locked");
        assert!(err.action().is_none());
        assert!(err.fields().is_empty());
    }

    #[test]
    fn test_bad_request() {
        let err = AppError::bad_request("Unsupported locale");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_validation_carries_fields() {
        let mut fields = FieldErrors::new();
        fields.add("confirmPassword", "auth.errors.passwordsMismatch");

        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.status_code(), 422);
        assert_eq!(
            err.fields().get("confirmPassword"),
            Some("auth.errors.passwordsMismatch")
        );
    }

    #[test]
    fn test_display() {
        let err = AppError::new(ErrorKind::NotFound, "Certificate not issued");
        assert_eq!(err.to_string(), "[Not Found] Certificate not issued");

        let err_with_action =
            AppError::bad_request("Invalid email").with_action("Enter valid email");
        assert!(err_with_action.to_string().contains("Action:"));
    }
}
