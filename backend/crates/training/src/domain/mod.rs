//! Domain Layer
//!
//! Quiz answer key and scoring, questionnaire answers, certificate content,
//! and repository traits.

pub mod certificate;
pub mod entity;
pub mod quiz;
pub mod repository;

// Re-exports
pub use entity::{
    certificate_issuance::CertificateIssuance, questionnaire::QuestionnaireResponse,
    quiz_attempt::QuizAttempt,
};
pub use repository::{
    CertificateRepository, QuestionnaireRepository, QuizRepository, TrainingRepository,
};
