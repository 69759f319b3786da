//! Application Layer
//!
//! Use cases and application configuration.

pub mod certificate;
pub mod config;
pub mod questionnaire;
pub mod quiz;

// Re-exports
pub use certificate::{DownloadCertificateUseCase, GetIssuanceUseCase, RecordIssuanceUseCase};
pub use config::TrainingConfig;
pub use questionnaire::{
    GetQuestionnaireUseCase, SubmitQuestionnaireInput, SubmitQuestionnaireUseCase,
};
pub use quiz::{GetQuizResultUseCase, SubmitQuizUseCase};
