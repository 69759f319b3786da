//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use i18n::{Locale, LocalizeResult, Localized, Translator};

use crate::application::config::TrainingConfig;
use crate::application::{
    DownloadCertificateUseCase, GetIssuanceUseCase, GetQuestionnaireUseCase,
    GetQuizResultUseCase, RecordIssuanceUseCase, SubmitQuestionnaireInput,
    SubmitQuestionnaireUseCase, SubmitQuizUseCase,
};
use crate::domain::entity::questionnaire::QUESTION_IDS;
use crate::domain::quiz::localized_questions;
use crate::domain::repository::TrainingRepository;
use crate::error::TrainingError;
use crate::presentation::dto::{
    CertInfoRequest, CertInfoResponse, QuestionLabel, QuestionnaireFormResponse,
    QuestionnaireRequest, QuizResponse, QuizResultResponse, StoredQuestionnaireResponse,
    SubmitQuizRequest,
};
use crate::presentation::extractor::Authenticated;

/// Shared state for training handlers
pub struct TrainingAppState<R: TrainingRepository> {
    pub repo: Arc<R>,
    pub config: Arc<TrainingConfig>,
}

impl<R: TrainingRepository> Clone for TrainingAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

// ============================================================================
// Quiz
// ============================================================================

/// GET /api/quiz
pub async fn get_quiz(locale: Locale) -> Json<QuizResponse> {
    let t = Translator::new(locale);

    Json(QuizResponse {
        title: t.t("quiz.title"),
        questions: localized_questions(&t).into_iter().map(Into::into).collect(),
    })
}

/// POST /api/quiz/submit
pub async fn submit_quiz<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<Json<QuizResultResponse>, Localized<TrainingError>> {
    let use_case = SubmitQuizUseCase::new(state.repo.clone());
    let score = use_case
        .execute(&principal, &req.answers, locale)
        .await
        .localize(locale)?;

    Ok(Json(score.into()))
}

/// GET /api/quiz/result
pub async fn quiz_result<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
) -> Result<Json<QuizResultResponse>, Localized<TrainingError>> {
    let use_case = GetQuizResultUseCase::new(state.repo.clone());
    let attempt = use_case.execute(&principal).await.localize(locale)?;

    Ok(Json(attempt.score().into()))
}

// ============================================================================
// Questionnaire
// ============================================================================

/// GET /api/questionnaire/form
pub async fn questionnaire_form(locale: Locale) -> Json<QuestionnaireFormResponse> {
    let t = Translator::new(locale);

    Json(QuestionnaireFormResponse {
        title: t.t("questionnaire.title"),
        subtitle: t.t("questionnaire.subtitle"),
        placeholder: t.t("questionnaire.placeholder"),
        questions: QUESTION_IDS
            .iter()
            .map(|&id| QuestionLabel {
                id,
                label: t.t(&format!("questionnaire.questions.{id}")),
            })
            .collect(),
    })
}

/// POST /api/questionnaire
pub async fn submit_questionnaire<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
    Json(req): Json<QuestionnaireRequest>,
) -> Result<StatusCode, Localized<TrainingError>> {
    let (email, answers) = req.into_parts();

    let use_case = SubmitQuestionnaireUseCase::new(state.repo.clone());
    use_case
        .execute(&principal, SubmitQuestionnaireInput { email, answers })
        .await
        .localize(locale)?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/questionnaire
pub async fn get_questionnaire<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
) -> Result<Json<StoredQuestionnaireResponse>, Localized<TrainingError>> {
    let use_case = GetQuestionnaireUseCase::new(state.repo.clone());
    let response = use_case.execute(&principal).await.localize(locale)?;

    Ok(Json(response.into()))
}

// ============================================================================
// Certificate
// ============================================================================

/// GET /api/certificate
pub async fn download_certificate<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
) -> Result<impl IntoResponse, Localized<TrainingError>> {
    let use_case = DownloadCertificateUseCase::new(state.config.clone());
    let bytes = use_case
        .execute_today(&principal, locale)
        .await
        .localize(locale)?;

    let disposition = HeaderValue::from_str(&state.config.content_disposition())
        .map_err(|e| TrainingError::Internal(format!("Invalid file name: {}", e)))
        .localize(locale)?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// POST /api/certinfo
pub async fn record_issuance<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
    Json(req): Json<CertInfoRequest>,
) -> Result<StatusCode, Localized<TrainingError>> {
    let use_case = RecordIssuanceUseCase::new(state.repo.clone());
    use_case
        .execute(&principal, req.email.as_deref())
        .await
        .localize(locale)?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/certinfo
pub async fn get_issuance<R: TrainingRepository>(
    State(state): State<TrainingAppState<R>>,
    locale: Locale,
    Authenticated(principal): Authenticated,
) -> Result<Json<CertInfoResponse>, Localized<TrainingError>> {
    let use_case = GetIssuanceUseCase::new(state.repo.clone());
    let issuance = use_case.execute(&principal).await.localize(locale)?;

    Ok(Json(issuance.into()))
}
