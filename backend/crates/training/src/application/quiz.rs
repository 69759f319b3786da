//! Quiz Use Cases
//!
//! Scores the pre-quiz, keeps the latest attempt and reads it back for the
//! dashboard.

use std::sync::Arc;

use i18n::Locale;
use kernel::principal::Principal;

use crate::domain::entity::quiz_attempt::QuizAttempt;
use crate::domain::quiz::{QuizScore, score_answers};
use crate::domain::repository::TrainingRepository;
use crate::error::{TrainingError, TrainingResult};

pub struct SubmitQuizUseCase<R: TrainingRepository> {
    repo: Arc<R>,
}

impl<R: TrainingRepository> SubmitQuizUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        answers: &[usize],
        locale: Locale,
    ) -> TrainingResult<QuizScore> {
        let score = score_answers(answers)?;

        let attempt = QuizAttempt::new(principal.email.as_str(), score, locale);
        self.repo.save_quiz_attempt(&attempt).await?;

        tracing::info!(
            public_id = %principal.public_id,
            score = score.score,
            total = score.total,
            locale = %locale,
            "Quiz submitted"
        );

        Ok(score)
    }
}

pub struct GetQuizResultUseCase<R: TrainingRepository> {
    repo: Arc<R>,
}

impl<R: TrainingRepository> GetQuizResultUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, principal: &Principal) -> TrainingResult<QuizAttempt> {
        self.repo
            .find_quiz_attempt(&principal.email)
            .await?
            .ok_or(TrainingError::QuizNotTaken)
    }
}
