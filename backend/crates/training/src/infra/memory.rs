//! In-Memory Repository
//!
//! Used when no database is configured (development) and by tests.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{
    certificate_issuance::CertificateIssuance, questionnaire::QuestionnaireResponse,
    quiz_attempt::QuizAttempt,
};
use crate::domain::repository::{CertificateRepository, QuestionnaireRepository, QuizRepository};
use crate::error::TrainingResult;

#[derive(Default)]
struct Tables {
    quiz_attempts: HashMap<String, QuizAttempt>,
    questionnaires: HashMap<String, QuestionnaireResponse>,
    issuances: HashMap<String, CertificateIssuance>,
}

#[derive(Clone, Default)]
pub struct MemoryTrainingRepository {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryTrainingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuizRepository for MemoryTrainingRepository {
    async fn save_quiz_attempt(&self, attempt: &QuizAttempt) -> TrainingResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .quiz_attempts
            .insert(attempt.email.clone(), attempt.clone());
        Ok(())
    }

    async fn find_quiz_attempt(&self, email: &str) -> TrainingResult<Option<QuizAttempt>> {
        Ok(self.tables.read().await.quiz_attempts.get(email).cloned())
    }
}

impl QuestionnaireRepository for MemoryTrainingRepository {
    async fn upsert_questionnaire(&self, response: &QuestionnaireResponse) -> TrainingResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .questionnaires
            .insert(response.email.clone(), response.clone());
        Ok(())
    }

    async fn find_questionnaire(
        &self,
        email: &str,
    ) -> TrainingResult<Option<QuestionnaireResponse>> {
        Ok(self.tables.read().await.questionnaires.get(email).cloned())
    }
}

impl CertificateRepository for MemoryTrainingRepository {
    async fn record_issuance(&self, issuance: &CertificateIssuance) -> TrainingResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .issuances
            .insert(issuance.email.clone(), issuance.clone());
        Ok(())
    }

    async fn find_issuance(&self, email: &str) -> TrainingResult<Option<CertificateIssuance>> {
        Ok(self.tables.read().await.issuances.get(email).cloned())
    }
}
