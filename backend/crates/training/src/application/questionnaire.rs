//! Questionnaire Use Cases
//!
//! Stores the post-training answers, replacing an earlier submission.

use std::sync::Arc;

use kernel::principal::Principal;

use crate::domain::entity::questionnaire::{QuestionnaireAnswers, QuestionnaireResponse};
use crate::domain::repository::TrainingRepository;
use crate::error::{TrainingError, TrainingResult};

pub struct SubmitQuestionnaireInput {
    /// Must designate the session's participant when present
    pub email: Option<String>,
    pub answers: QuestionnaireAnswers,
}

pub struct SubmitQuestionnaireUseCase<R: TrainingRepository> {
    repo: Arc<R>,
}

impl<R: TrainingRepository> SubmitQuestionnaireUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        input: SubmitQuestionnaireInput,
    ) -> TrainingResult<()> {
        check_email(principal, input.email.as_deref())?;

        let answers = input.answers.validated()?;
        let response = QuestionnaireResponse::new(principal.email.as_str(), answers);
        self.repo.upsert_questionnaire(&response).await?;

        tracing::info!(public_id = %principal.public_id, "Questionnaire submitted");
        Ok(())
    }
}

pub struct GetQuestionnaireUseCase<R: TrainingRepository> {
    repo: Arc<R>,
}

impl<R: TrainingRepository> GetQuestionnaireUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, principal: &Principal) -> TrainingResult<QuestionnaireResponse> {
        self.repo
            .find_questionnaire(&principal.email)
            .await?
            .ok_or(TrainingError::QuestionnaireNotSubmitted)
    }
}

/// A client-supplied email may only name the signed-in participant
pub(crate) fn check_email(principal: &Principal, email: Option<&str>) -> TrainingResult<()> {
    match email {
        Some(email) if !email.trim().is_empty() && !principal.owns_email(email) => {
            Err(TrainingError::EmailMismatch)
        }
        _ => Ok(()),
    }
}
