//! Repository Traits
//!
//! Training records are keyed by the participant's lowercased email.

use crate::domain::entity::{
    certificate_issuance::CertificateIssuance, questionnaire::QuestionnaireResponse,
    quiz_attempt::QuizAttempt,
};
use crate::error::TrainingResult;

#[trait_variant::make(QuizRepository: Send)]
pub trait LocalQuizRepository {
    /// Store the attempt, replacing any earlier one for the same email
    async fn save_quiz_attempt(&self, attempt: &QuizAttempt) -> TrainingResult<()>;

    async fn find_quiz_attempt(&self, email: &str) -> TrainingResult<Option<QuizAttempt>>;
}

#[trait_variant::make(QuestionnaireRepository: Send)]
pub trait LocalQuestionnaireRepository {
    /// Insert or replace the response for `response.email`
    async fn upsert_questionnaire(&self, response: &QuestionnaireResponse) -> TrainingResult<()>;

    async fn find_questionnaire(&self, email: &str)
    -> TrainingResult<Option<QuestionnaireResponse>>;
}

#[trait_variant::make(CertificateRepository: Send)]
pub trait LocalCertificateRepository {
    /// Record an issuance. Repeats keep one record and refresh `issued_at`.
    async fn record_issuance(&self, issuance: &CertificateIssuance) -> TrainingResult<()>;

    async fn find_issuance(&self, email: &str) -> TrainingResult<Option<CertificateIssuance>>;
}

/// Everything the training use cases need from storage
pub trait TrainingRepository:
    QuizRepository + QuestionnaireRepository + CertificateRepository + Send + Sync + 'static
{
}

impl<T> TrainingRepository for T where
    T: QuizRepository + QuestionnaireRepository + CertificateRepository + Send + Sync + 'static
{
}
