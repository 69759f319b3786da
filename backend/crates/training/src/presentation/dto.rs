//! API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::entity::certificate_issuance::CertificateIssuance;
use crate::domain::entity::questionnaire::{QuestionnaireAnswers, QuestionnaireResponse};
use crate::domain::quiz::{QuizQuestion, QuizScore};

// ============================================================================
// Quiz
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionDto {
    pub index: usize,
    pub question: String,
    pub answers: Vec<String>,
}

impl From<QuizQuestion> for QuizQuestionDto {
    fn from(q: QuizQuestion) -> Self {
        Self {
            index: q.index,
            question: q.question,
            answers: q.answers,
        }
    }
}

/// GET /api/quiz
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub title: String,
    pub questions: Vec<QuizQuestionDto>,
}

/// POST /api/quiz/submit
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[serde(default)]
    pub answers: Vec<usize>,
}

/// POST /api/quiz/submit, GET /api/quiz/result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultResponse {
    pub score: usize,
    pub total_questions: usize,
    pub percentage: f64,
}

impl From<QuizScore> for QuizResultResponse {
    fn from(score: QuizScore) -> Self {
        Self {
            score: score.score,
            total_questions: score.total,
            percentage: score.percentage(),
        }
    }
}

// ============================================================================
// Questionnaire
// ============================================================================

/// POST /api/questionnaire
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionnaireRequest {
    pub email: Option<String>,
    pub dispositif: String,
    pub engagement: String,
    pub identification: String,
    pub formation: String,
    pub procedure: String,
    pub dispositif_alert: String,
    #[serde(rename = "certifierISO")]
    pub certifier_iso: String,
    pub mep_system: String,
    pub intention: String,
}

impl QuestionnaireRequest {
    pub fn into_parts(self) -> (Option<String>, QuestionnaireAnswers) {
        (
            self.email,
            QuestionnaireAnswers {
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
        )
    }
}

/// GET /api/questionnaire
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuestionnaireResponse {
    pub dispositif: String,
    pub engagement: String,
    pub identification: String,
    pub formation: String,
    pub procedure: String,
    pub dispositif_alert: String,
    #[serde(rename = "certifierISO")]
    pub certifier_iso: String,
    pub mep_system: String,
    pub intention: String,
    pub submitted_at_ms: i64,
}

impl From<QuestionnaireResponse> for StoredQuestionnaireResponse {
    fn from(response: QuestionnaireResponse) -> Self {
        let answers = response.answers;
        Self {
            dispositif: answers.dispositif,
            engagement: answers.engagement,
            identification: answers.identification,
            formation: answers.formation,
            procedure: answers.procedure,
            dispositif_alert: answers.dispositif_alert,
            certifier_iso: answers.certifier_iso,
            mep_system: answers.mep_system,
            intention: answers.intention,
            submitted_at_ms: response.submitted_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionLabel {
    pub id: &'static str,
    pub label: String,
}

/// GET /api/questionnaire/form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireFormResponse {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub questions: Vec<QuestionLabel>,
}

// ============================================================================
// Certificate
// ============================================================================

/// POST /api/certinfo
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertInfoRequest {
    pub email: Option<String>,
}

/// GET /api/certinfo
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertInfoResponse {
    pub email: String,
    pub completed: bool,
    pub issued_at_ms: i64,
}

impl From<CertificateIssuance> for CertInfoResponse {
    fn from(issuance: CertificateIssuance) -> Self {
        Self {
            email: issuance.email,
            completed: issuance.completed,
            issued_at_ms: issuance.issued_at.timestamp_millis(),
        }
    }
}
