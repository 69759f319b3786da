//! Localized Errors
//!
//! Domain errors carry translation keys. [`Localized`] pairs an error with the
//! request locale and renders it as a `kernel` [`AppError`] whose `detail` and
//! field messages are already translated.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::locale::Locale;
use crate::translator::Translator;

/// Errors that know how to present themselves in a given locale
pub trait LocalizedError: std::error::Error {
    fn to_app_error(&self, t: &Translator) -> AppError;

    /// Log at a level matching the severity. Default is `debug`.
    fn log(&self) {
        tracing::debug!(error = %self, "Request failed");
    }
}

/// An error bound to the locale it should be rendered in
#[derive(Debug)]
pub struct Localized<E> {
    pub error: E,
    pub locale: Locale,
}

impl<E> Localized<E> {
    pub fn new(error: E, locale: Locale) -> Self {
        Self { error, locale }
    }
}

impl<E: LocalizedError> IntoResponse for Localized<E> {
    fn into_response(self) -> Response {
        self.error.log();
        self.error
            .to_app_error(&Translator::new(self.locale))
            .into_response()
    }
}

/// `result.localize(locale)?` inside handlers
pub trait LocalizeResult<T, E> {
    fn localize(self, locale: Locale) -> Result<T, Localized<E>>;
}

impl<T, E> LocalizeResult<T, E> for Result<T, E> {
    fn localize(self, locale: Locale) -> Result<T, Localized<E>> {
        self.map_err(|error| Localized::new(error, locale))
    }
}

// ============================================================================
// i18n errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl I18nError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            I18nError::UnsupportedLocale(_) => ErrorKind::BadRequest,
        }
    }
}

impl LocalizedError for I18nError {
    fn to_app_error(&self, t: &Translator) -> AppError {
        match self {
            I18nError::UnsupportedLocale(code) => AppError::new(
                self.kind(),
                t.t_with("i18n.errors.unsupportedLocale", &[("locale", code)]),
            )
            .with_action(
                Locale::ALL
                    .iter()
                    .map(|l| l.code())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

impl IntoResponse for I18nError {
    fn into_response(self) -> Response {
        Localized::new(self, Locale::DEFAULT).into_response()
    }
}
