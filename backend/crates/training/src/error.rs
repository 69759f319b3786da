//! Training Error Types

use i18n::{LocalizedError, Translator, ValidationErrors};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type TrainingResult<T> = Result<T, TrainingError>;

#[derive(Debug, Error)]
pub enum TrainingError {
    /// No signed-in participant on the request
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// The body names another participant than the session
    #[error("Email does not match the session")]
    EmailMismatch,

    #[error("Quiz not taken yet")]
    QuizNotTaken,

    #[error("Questionnaire not submitted yet")]
    QuestionnaireNotSubmitted,

    #[error("No certificate issued yet")]
    CertificateNotIssued,

    #[error("Certificate rendering failed: {0}")]
    Render(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrainingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrainingError::Unauthenticated => ErrorKind::Unauthorized,
            TrainingError::Validation(_) => ErrorKind::UnprocessableEntity,
            TrainingError::EmailMismatch => ErrorKind::Forbidden,
            TrainingError::QuizNotTaken
            | TrainingError::QuestionnaireNotSubmitted
            | TrainingError::CertificateNotIssued => ErrorKind::NotFound,
            TrainingError::Database(e) => ErrorKind::of_sqlx(e),
            TrainingError::Render(_) | TrainingError::Internal(_) => ErrorKind::InternalServerError,
        }
    }
}

impl LocalizedError for TrainingError {
    fn to_app_error(&self, t: &Translator) -> AppError {
        let kind = self.kind();
        match self {
            TrainingError::Unauthenticated => {
                AppError::new(kind, t.t("auth.errors.sessionRequired")).with_action("/login")
            }
            TrainingError::Validation(errors) => {
                AppError::validation(t.t("common.errors.validation"), errors.to_field_errors(t))
            }
            TrainingError::EmailMismatch => AppError::new(kind, t.t("auth.errors.emailMismatch")),
            TrainingError::QuizNotTaken => AppError::new(kind, t.t("quiz.errors.notTaken")),
            TrainingError::QuestionnaireNotSubmitted => {
                AppError::new(kind, t.t("questionnaire.errors.notSubmitted"))
            }
            TrainingError::CertificateNotIssued => {
                AppError::new(kind, t.t("certificate.errors.notIssued"))
            }
            TrainingError::Render(_) => AppError::new(kind, t.t("certificate.errors.renderFailed")),
            TrainingError::Database(_) if kind == ErrorKind::ServiceUnavailable => {
                AppError::new(kind, t.t("common.errors.unavailable"))
            }
            TrainingError::Database(_) | TrainingError::Internal(_) => {
                AppError::new(kind, t.t("common.errors.internal"))
            }
        }
    }

    fn log(&self) {
        match self {
            TrainingError::Database(e) => {
                tracing::error!(error = %e, "Training database error");
            }
            TrainingError::Render(msg) => {
                tracing::error!(message = %msg, "Certificate rendering error");
            }
            TrainingError::Internal(msg) => {
                tracing::error!(message = %msg, "Training internal error");
            }
            TrainingError::EmailMismatch => {
                tracing::warn!("Request body email differs from session email");
            }
            _ => {
                tracing::debug!(error = %self, "Training error");
            }
        }
    }
}

impl From<ValidationErrors> for TrainingError {
    fn from(errors: ValidationErrors) -> Self {
        TrainingError::Validation(errors)
    }
}

impl From<printpdf::Error> for TrainingError {
    fn from(err: printpdf::Error) -> Self {
        TrainingError::Render(err.to_string())
    }
}
