//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use i18n::Locale;
use sqlx::PgPool;

use crate::domain::entity::{
    certificate_issuance::CertificateIssuance,
    questionnaire::{QuestionnaireAnswers, QuestionnaireResponse},
    quiz_attempt::QuizAttempt,
};
use crate::domain::repository::{CertificateRepository, QuestionnaireRepository, QuizRepository};
use crate::error::TrainingResult;

/// PostgreSQL-backed training repository
#[derive(Clone)]
pub struct PgTrainingRepository {
    pool: PgPool,
}

impl PgTrainingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Quiz Repository Implementation
// ============================================================================

impl QuizRepository for PgTrainingRepository {
    async fn save_quiz_attempt(&self, attempt: &QuizAttempt) -> TrainingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO quiz_attempts (
                email,
                score,
                total_questions,
                locale,
                submitted_at
            ) VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO UPDATE SET
                score = EXCLUDED.score,
                total_questions = EXCLUDED.total_questions,
                locale = EXCLUDED.locale,
                submitted_at = EXCLUDED.submitted_at
            "#,
        )
        .bind(&attempt.email)
        .bind(attempt.score as i16)
        .bind(attempt.total_questions as i16)
        .bind(attempt.locale.code())
        .bind(attempt.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_quiz_attempt(&self, email: &str) -> TrainingResult<Option<QuizAttempt>> {
        let row = sqlx::query_as::<_, QuizAttemptRow>(
            r#"
            SELECT
                email,
                score,
                total_questions,
                locale,
                submitted_at
            FROM quiz_attempts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuizAttemptRow::into_attempt))
    }
}

// ============================================================================
// Questionnaire Repository Implementation
// ============================================================================

impl QuestionnaireRepository for PgTrainingRepository {
    async fn upsert_questionnaire(&self, response: &QuestionnaireResponse) -> TrainingResult<()> {
        let answers = &response.answers;

        sqlx::query(
            r#"
            INSERT INTO questionnaire_responses (
                email,
                dispositif,
                engagement,
                identification,
                formation,
                procedure,
                dispositif_alert,
                certifier_iso,
                mep_system,
                intention,
                submitted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (email) DO UPDATE SET
                dispositif = EXCLUDED.dispositif,
                engagement = EXCLUDED.engagement,
                identification = EXCLUDED.identification,
                formation = EXCLUDED.formation,
                procedure = EXCLUDED.procedure,
                dispositif_alert = EXCLUDED.dispositif_alert,
                certifier_iso = EXCLUDED.certifier_iso,
                mep_system = EXCLUDED.mep_system,
                intention = EXCLUDED.intention,
                submitted_at = EXCLUDED.submitted_at
            "#,
        )
        .bind(&response.email)
        .bind(&answers.dispositif)
        .bind(&answers.engagement)
        .bind(&answers.identification)
        .bind(&answers.formation)
        .bind(&answers.procedure)
        .bind(&answers.dispositif_alert)
        .bind(&answers.certifier_iso)
        .bind(&answers.mep_system)
        .bind(&answers.intention)
        .bind(response.submitted_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_questionnaire(
        &self,
        email: &str,
    ) -> TrainingResult<Option<QuestionnaireResponse>> {
        let row = sqlx::query_as::<_, QuestionnaireRow>(
            r#"
            SELECT
                email,
                dispositif,
                engagement,
                identification,
                formation,
                procedure,
                dispositif_alert,
                certifier_iso,
                mep_system,
                intention,
                submitted_at
            FROM questionnaire_responses
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuestionnaireRow::into_response))
    }
}

// ============================================================================
// Certificate Repository Implementation
// ============================================================================

impl CertificateRepository for PgTrainingRepository {
    async fn record_issuance(&self, issuance: &CertificateIssuance) -> TrainingResult<()> {
        sqlx::query(
            r#"
            INSERT INTO certificate_issuances (
                email,
                completed,
                issued_at
            ) VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE SET
                completed = EXCLUDED.completed,
                issued_at = EXCLUDED.issued_at
            "#,
        )
        .bind(&issuance.email)
        .bind(issuance.completed)
        .bind(issuance.issued_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_issuance(&self, email: &str) -> TrainingResult<Option<CertificateIssuance>> {
        let row = sqlx::query_as::<_, IssuanceRow>(
            r#"
            SELECT
                email,
                completed,
                issued_at
            FROM certificate_issuances
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| CertificateIssuance {
            email: r.email,
            completed: r.completed,
            issued_at: r.issued_at,
        }))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct QuizAttemptRow {
    email: String,
    score: i16,
    total_questions: i16,
    locale: String,
    submitted_at: DateTime<Utc>,
}

impl QuizAttemptRow {
    fn into_attempt(self) -> QuizAttempt {
        QuizAttempt {
            email: self.email,
            score: self.score.max(0) as u16,
            total_questions: self.total_questions.max(0) as u16,
            locale: Locale::from_code(&self.locale).unwrap_or_default(),
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct QuestionnaireRow {
    email: String,
    dispositif: String,
    engagement: String,
    identification: String,
    formation: String,
    procedure: String,
    dispositif_alert: String,
    certifier_iso: String,
    mep_system: String,
    intention: String,
    submitted_at: DateTime<Utc>,
}

impl QuestionnaireRow {
    fn into_response(self) -> QuestionnaireResponse {
        QuestionnaireResponse {
            email: self.email,
            answers: QuestionnaireAnswers {
                dispositif: self.dispositif,
                engagement: self.engagement,
                identification: self.identification,
                formation: self.formation,
                procedure: self.procedure,
                dispositif_alert: self.dispositif_alert,
                certifier_iso: self.certifier_iso,
                mep_system: self.mep_system,
                intention: self.intention,
            },
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct IssuanceRow {
    email: String,
    completed: bool,
    issued_at: DateTime<Utc>,
}
