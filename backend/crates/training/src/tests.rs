//! Use case and router tests against the in-memory repository

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::{Extension, Router};
use chrono::NaiveDate;
use i18n::Locale;
use kernel::id::UserId;
use kernel::principal::Principal;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::{
    DownloadCertificateUseCase, SubmitQuestionnaireInput, SubmitQuestionnaireUseCase,
    SubmitQuizUseCase, TrainingConfig,
};
use crate::domain::entity::questionnaire::QuestionnaireAnswers;
use crate::domain::quiz::ANSWER_KEY;
use crate::domain::repository::{QuestionnaireRepository, QuizRepository};
use crate::error::TrainingError;
use crate::infra::memory::MemoryTrainingRepository;
use crate::presentation::router::training_router;

fn principal() -> Principal {
    Principal {
        user_id: UserId::new(),
        public_id: "V1StGXR8_Z5jdHi6B-myT".to_string(),
        email: "awa@example.com".to_string(),
        full_name: "Awa Koné".to_string(),
        company_name: "Sogea Satom".to_string(),
    }
}

fn answers() -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        dispositif: "Cartographie des risques".into(),
        engagement: "Tolérance zéro".into(),
        identification: "Signaux d'alerte".into(),
        formation: "Due diligence".into(),
        procedure: "Refuser et signaler".into(),
        dispositif_alert: "Plateforme dédiée".into(),
        certifier_iso: "ISO 37001".into(),
        mep_system: "Comité éthique".into(),
        intention: "Sensibiliser l'équipe".into(),
    }
}

fn questionnaire_json(email: &str) -> Value {
    json!({
        "email": email,
        "dispositif": "Cartographie des risques",
        "engagement": "Tolérance zéro",
        "identification": "Signaux d'alerte",
        "formation": "Due diligence",
        "procedure": "Refuser et signaler",
        "dispositifAlert": "Plateforme dédiée",
        "certifierISO": "ISO 37001",
        "mepSystem": "Comité éthique",
        "intention": "Sensibiliser l'équipe",
    })
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// Use cases
// ============================================================================

#[tokio::test]
async fn test_quiz_submission_keeps_latest_attempt() {
    let repo = Arc::new(MemoryTrainingRepository::new());
    let use_case = SubmitQuizUseCase::new(repo.clone());
    let p = principal();

    let score = use_case.execute(&p, &[0; 10], Locale::Fr).await.unwrap();
    assert_eq!(score.score, 4);

    let score = use_case.execute(&p, &ANSWER_KEY, Locale::Es).await.unwrap();
    assert_eq!(score.score, 10);

    let attempt = repo.find_quiz_attempt(&p.email).await.unwrap().unwrap();
    assert_eq!(attempt.score, 10);
    assert_eq!(attempt.total_questions, 10);
    assert_eq!(attempt.locale, Locale::Es);
}

#[tokio::test]
async fn test_questionnaire_resubmission_replaces_answers() {
    let repo = Arc::new(MemoryTrainingRepository::new());
    let use_case = SubmitQuestionnaireUseCase::new(repo.clone());
    let p = principal();

    use_case
        .execute(&p, SubmitQuestionnaireInput { email: None, answers: answers() })
        .await
        .unwrap();

    let mut updated = answers();
    updated.intention = "Former mes collègues".into();
    use_case
        .execute(
            &p,
            SubmitQuestionnaireInput {
                email: Some("AWA@example.com".into()),
                answers: updated,
            },
        )
        .await
        .unwrap();

    let stored = repo.find_questionnaire(&p.email).await.unwrap().unwrap();
    assert_eq!(stored.answers.intention, "Former mes collègues");
}

#[tokio::test]
async fn test_questionnaire_for_another_email_is_rejected() {
    let repo = Arc::new(MemoryTrainingRepository::new());
    let use_case = SubmitQuestionnaireUseCase::new(repo.clone());

    let result = use_case
        .execute(
            &principal(),
            SubmitQuestionnaireInput {
                email: Some("someone@else.com".into()),
                answers: answers(),
            },
        )
        .await;

    assert!(matches!(result, Err(TrainingError::EmailMismatch)));
    assert!(repo.find_questionnaire("awa@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_certificate_renders_with_default_profile_fields() {
    let use_case = DownloadCertificateUseCase::new(Arc::new(TrainingConfig::default()));
    let mut p = principal();
    p.full_name = String::new();
    p.company_name = String::new();

    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let bytes = use_case.execute(&p, Locale::Fr, date).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

// ============================================================================
// Router
// ============================================================================

fn app(repo: Arc<MemoryTrainingRepository>) -> Router {
    training_router(repo, Arc::new(TrainingConfig::default()))
}

fn signed_in_app(repo: Arc<MemoryTrainingRepository>) -> Router {
    app(repo).layer(Extension(principal()))
}

#[tokio::test]
async fn test_quiz_is_localized_without_answer_key() {
    let app = app(Arc::new(MemoryTrainingRepository::new()));

    let response = app
        .oneshot(
            Request::get("/quiz")
                .header(header::ACCEPT_LANGUAGE, "es-ES,es;q=0.9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[3]["answers"].as_array().unwrap().len(), 2);
    assert!(questions[0].get("correct").is_none());
    assert_ne!(body["title"], "quiz.title");
}

#[tokio::test]
async fn test_quiz_submit_reports_score_and_percentage() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let mut answers = ANSWER_KEY.to_vec();
    answers[0] = 0;
    answers[1] = 0;
    let response = app
        .oneshot(post_json("/quiz/submit", json!({ "answers": answers })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["score"], 8);
    assert_eq!(body["totalQuestions"], 10);
    assert_eq!(body["percentage"], 80.0);
}

#[tokio::test]
async fn test_quiz_result_returns_latest_attempt() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app.clone().oneshot(get("/quiz/result")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "Vous n'avez pas encore répondu au quiz");

    for answers in [vec![0; 10], ANSWER_KEY.to_vec()] {
        let response = app
            .clone()
            .oneshot(post_json("/quiz/submit", json!({ "answers": answers })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/quiz/result")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["score"], 10);
    assert_eq!(body["totalQuestions"], 10);
    assert_eq!(body["percentage"], 100.0);
}

#[tokio::test]
async fn test_quiz_submit_rejects_short_answer_list() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app
        .oneshot(post_json("/quiz/submit", json!({ "answers": [1, 3] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["field"], "answers");
}

#[tokio::test]
async fn test_session_routes_require_principal() {
    let app = app(Arc::new(MemoryTrainingRepository::new()));

    for request in [
        get("/certificate"),
        get("/certinfo"),
        get("/quiz/result"),
        get("/questionnaire"),
        post_json("/certinfo", json!({})),
        post_json("/questionnaire", questionnaire_json("awa@example.com")),
        post_json("/quiz/submit", json!({ "answers": ANSWER_KEY })),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["action"], "/login");
    }
}

#[tokio::test]
async fn test_questionnaire_is_stored_for_session_email() {
    let repo = Arc::new(MemoryTrainingRepository::new());
    let app = signed_in_app(repo.clone());

    let response = app
        .oneshot(post_json("/questionnaire", questionnaire_json("awa@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let stored = repo.find_questionnaire("awa@example.com").await.unwrap().unwrap();
    assert_eq!(stored.answers.certifier_iso, "ISO 37001");
}

#[tokio::test]
async fn test_stored_questionnaire_is_readable() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app.clone().oneshot(get("/questionnaire")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(post_json("/questionnaire", questionnaire_json("AWA@example.com")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/questionnaire")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["certifierISO"], "ISO 37001");
    assert_eq!(body["dispositifAlert"], "Plateforme dédiée");
    assert!(body["submittedAtMs"].as_i64().unwrap() > 0);
    assert!(body.get("email").is_none());
}

#[tokio::test]
async fn test_questionnaire_email_mismatch_is_forbidden() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app
        .oneshot(post_json("/questionnaire", questionnaire_json("mallory@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_blank_questionnaire_reports_every_field() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app
        .oneshot(post_json("/questionnaire", json!({ "dispositif": "  " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], "dispositif");
    assert!(fields.contains(&"certifierISO"));
}

#[tokio::test]
async fn test_questionnaire_form_lists_nine_labels() {
    let app = app(Arc::new(MemoryTrainingRepository::new()));

    let response = app.oneshot(get("/questionnaire/form")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 9);
    assert_eq!(questions[6]["id"], "certifierISO");
    assert_ne!(questions[6]["label"], "questionnaire.questions.certifierISO");
}

#[tokio::test]
async fn test_certificate_download_is_pdf_attachment() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app.oneshot(get("/certificate")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"certificat.pdf\""
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_certinfo_recording_is_idempotent() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app.clone().oneshot(get("/certinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_json("/certinfo", json!({ "email": "awa@example.com" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = app.oneshot(get("/certinfo")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["email"], "awa@example.com");
    assert_eq!(body["completed"], true);
    assert!(body["issuedAtMs"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_certinfo_for_another_email_is_forbidden() {
    let app = signed_in_app(Arc::new(MemoryTrainingRepository::new()));

    let response = app
        .oneshot(post_json("/certinfo", json!({ "email": "mallory@example.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
