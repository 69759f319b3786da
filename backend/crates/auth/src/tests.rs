//! Use case and router tests against the in-memory repository

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use axum::{Router, middleware, routing::get};
use kernel::principal::Principal;
use platform::client::ClientFingerprint;
use platform::crypto::sha256;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::{
    AuthConfig, CheckSessionUseCase, RegisterInput, RegisterUseCase, SignInInput, SignInUseCase,
};
use crate::domain::entity::credentials::Credentials;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;
use crate::infra::memory::MemoryAuthRepository;
use crate::presentation::middleware::{AuthMiddlewareState, resolve_session};
use crate::presentation::router::auth_router;

const USER_AGENT: &str = "Mozilla/5.0 Test Browser";
const PASSWORD: &str = "Kilimandjaro-2024";

fn setup() -> (Arc<MemoryAuthRepository>, Arc<AuthConfig>) {
    (
        Arc::new(MemoryAuthRepository::new()),
        Arc::new(AuthConfig::development()),
    )
}

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        full_name: "Awa Koné".to_string(),
        email: email.to_string(),
        company_name: "Sogea Satom".to_string(),
        password: PASSWORD.to_string(),
        confirm_password: Some(PASSWORD.to_string()),
    }
}

fn fingerprint() -> ClientFingerprint {
    ClientFingerprint::new(sha256(USER_AGENT.as_bytes()), None, Some(USER_AGENT.to_string()))
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::USER_AGENT, USER_AGENT)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `name=value` part of a Set-Cookie header
fn cookie_pair(response: &Response) -> String {
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

// ============================================================================
// Use cases
// ============================================================================

#[tokio::test]
async fn test_register_then_duplicate_email_is_taken() {
    let (repo, config) = setup();
    let use_case = RegisterUseCase::new(repo.clone(), config);

    let output = use_case.execute(register_input("awa@example.com")).await.unwrap();
    assert_eq!(output.public_id.len(), 21);

    let err = use_case
        .execute(register_input("  AWA@Example.com "))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::EmailTaken));
}

#[tokio::test]
async fn test_register_collects_every_invalid_field() {
    let (repo, config) = setup();
    let use_case = RegisterUseCase::new(repo, config);

    let err = use_case
        .execute(RegisterInput {
            full_name: " ".to_string(),
            email: "not-an-email".to_string(),
            company_name: String::new(),
            password: "short".to_string(),
            confirm_password: Some("other".to_string()),
        })
        .await
        .unwrap_err();

    let AuthError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors.get("fullName").unwrap().key(), "auth.errors.fullNameRequired");
    assert_eq!(errors.get("email").unwrap().key(), "auth.errors.emailInvalid");
    assert_eq!(errors.get("companyName").unwrap().key(), "auth.errors.companyNameRequired");
    assert_eq!(errors.get("password").unwrap().key(), "auth.errors.passwordMin");
    assert_eq!(
        errors.get("confirmPassword").unwrap().key(),
        "auth.errors.passwordsMismatch"
    );
}

#[tokio::test]
async fn test_register_empty_confirmation_is_required() {
    let (repo, config) = setup();
    let mut input = register_input("awa@example.com");
    input.confirm_password = Some(String::new());

    let err = RegisterUseCase::new(repo, config)
        .execute(input)
        .await
        .unwrap_err();
    let AuthError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("confirmPassword").unwrap().key(),
        "auth.errors.confirmPasswordRequired"
    );
}

#[tokio::test]
async fn test_sign_in_resolves_session_principal() {
    let (repo, config) = setup();
    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input("awa@example.com"))
        .await
        .unwrap();

    let output = SignInUseCase::new(repo.clone(), config.clone())
        .execute(
            SignInInput {
                email: "Awa@Example.com".to_string(),
                password: PASSWORD.to_string(),
            },
            fingerprint(),
        )
        .await
        .unwrap();

    let check = CheckSessionUseCase::new(repo, config);
    let session = check
        .execute(&output.session_token, &sha256(USER_AGENT.as_bytes()))
        .await
        .unwrap();
    assert_eq!(session.principal.email, "awa@example.com");
    assert_eq!(session.principal.full_name, "Awa Koné");
    assert_eq!(session.principal.public_id, output.public_id);

    let other_client = check
        .execute(&output.session_token, &sha256(b"curl/8.0"))
        .await
        .unwrap_err();
    assert!(matches!(other_client, AuthError::SessionFingerprintMismatch));
}

#[tokio::test]
async fn test_repeated_wrong_passwords_lock_the_account() {
    let (repo, config) = setup();
    RegisterUseCase::new(repo.clone(), config.clone())
        .execute(register_input("awa@example.com"))
        .await
        .unwrap();
    let sign_in = SignInUseCase::new(repo, config);
    let attempt = |password: &str| SignInInput {
        email: "awa@example.com".to_string(),
        password: password.to_string(),
    };

    for _ in 0..Credentials::MAX_LOGIN_FAILURES {
        let err = sign_in
            .execute(attempt("wrong-password"), fingerprint())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    // Even the right password is refused while locked
    let err = sign_in
        .execute(attempt(PASSWORD), fingerprint())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AuthError::AccountLocked { minutes } if minutes == Credentials::LOCKOUT_MINUTES
    ));
}

#[tokio::test]
async fn test_unknown_email_is_invalid_credentials() {
    let (repo, config) = setup();
    let err = SignInUseCase::new(repo, config)
        .execute(
            SignInInput {
                email: "nobody@example.com".to_string(),
                password: PASSWORD.to_string(),
            },
            fingerprint(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

// ============================================================================
// Router
// ============================================================================

fn app(repo: Arc<MemoryAuthRepository>, config: Arc<AuthConfig>) -> Router {
    auth_router(repo, config)
}

async fn register_and_sign_in(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/user",
            json!({
                "fullName": "Awa Koné",
                "email": "awa@example.com",
                "companyName": "Sogea Satom",
                "password": PASSWORD,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_json(
            "/auth/signin",
            json!({ "email": "awa@example.com", "password": PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    cookie_pair(&response)
}

fn session_request(cookie: &str) -> Request<Body> {
    Request::get("/auth/session")
        .header(header::COOKIE, cookie)
        .header(header::USER_AGENT, USER_AGENT)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_sign_in_sets_cookie_and_redirect_url() {
    let (repo, config) = setup();
    let app = app(repo, config);

    app.clone()
        .oneshot(post_json(
            "/user",
            json!({
                "fullName": "Awa Koné",
                "email": "awa@example.com",
                "companyName": "Sogea Satom",
                "password": PASSWORD,
                "confirmPassword": PASSWORD,
            }),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(post_json(
            "/auth/signin",
            json!({ "email": "awa@example.com", "password": PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_string();
    assert!(set_cookie.starts_with("auth_session="));
    assert!(set_cookie.contains("HttpOnly"));

    let body = json_body(response).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["url"], "/dashboard");
    assert_eq!(body["publicId"].as_str().unwrap().len(), 21);
}

#[tokio::test]
async fn test_session_status_reflects_cookie() {
    let (repo, config) = setup();
    let app = app(repo, config);
    let cookie = register_and_sign_in(&app).await;

    let body = json_body(app.clone().oneshot(session_request(&cookie)).await.unwrap()).await;
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["email"], "awa@example.com");
    assert_eq!(body["user"]["companyName"], "Sogea Satom");
    assert!(body["user"].get("userId").is_none());

    let anonymous = Request::get("/auth/session").body(Body::empty()).unwrap();
    let body = json_body(app.oneshot(anonymous).await.unwrap()).await;
    assert_eq!(body, json!({ "authenticated": false }));
}

#[tokio::test]
async fn test_tampered_session_cookie_is_rejected() {
    let (repo, config) = setup();
    let app = app(repo, config);
    let cookie = register_and_sign_in(&app).await;

    let (name_and_id, signature) = cookie.split_once('.').unwrap();
    let mut forged_id = name_and_id.to_string();
    let last = forged_id.pop().unwrap();
    forged_id.push(if last == '0' { '1' } else { '0' });
    let forged = format!("{forged_id}.{signature}");

    let body = json_body(app.oneshot(session_request(&forged)).await.unwrap()).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn test_sign_out_clears_cookie_and_session() {
    let (repo, config) = setup();
    let app = app(repo, config);
    let cookie = register_and_sign_in(&app).await;

    let response = app
        .clone()
        .oneshot(
            Request::post("/auth/signout")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(
        response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .contains("Max-Age=0")
    );

    let body = json_body(app.oneshot(session_request(&cookie)).await.unwrap()).await;
    assert_eq!(body["authenticated"], false);
}

#[tokio::test]
async fn test_duplicate_registration_is_conflict_in_request_language() {
    let (repo, config) = setup();
    let app = app(repo, config);
    register_and_sign_in(&app).await;

    let mut request = post_json(
        "/user",
        json!({
            "fullName": "Autre",
            "email": "AWA@example.com",
            "companyName": "Autre",
            "password": PASSWORD,
        }),
    );
    request
        .headers_mut()
        .insert(header::ACCEPT_LANGUAGE, "es-ES,es;q=0.9".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["errors"][0]["field"], "email");
}

#[tokio::test]
async fn test_empty_registration_reports_field_errors() {
    let (repo, config) = setup();
    let response = app(repo, config)
        .oneshot(post_json("/user", json!({})))
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
    assert_eq!(fields, ["fullName", "email", "companyName", "password"]);
    assert_eq!(body["errors"][1]["message"], "L'adresse e-mail est requise");
}

#[tokio::test]
async fn test_sign_in_without_user_agent_is_bad_request() {
    let (repo, config) = setup();
    let request = Request::post("/auth/signin")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "email": "awa@example.com", "password": PASSWORD }).to_string(),
        ))
        .unwrap();

    let response = app(repo, config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let (repo, config) = setup();
    let app = app(repo, config);
    register_and_sign_in(&app).await;

    let response = app
        .oneshot(post_json(
            "/auth/signin",
            json!({ "email": "awa@example.com", "password": "not-the-password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_body(response).await["detail"],
        "E-mail ou mot de passe incorrect"
    );
}

// ============================================================================
// Middleware
// ============================================================================

async fn whoami(req: axum::extract::Request) -> String {
    req.extensions()
        .get::<Principal>()
        .map(|p| p.email.clone())
        .unwrap_or_else(|| "anonymous".to_string())
}

fn protected_app(repo: Arc<MemoryAuthRepository>, config: Arc<AuthConfig>) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(
            AuthMiddlewareState { repo, config },
            resolve_session::<MemoryAuthRepository>,
        ))
}

fn whoami_request(cookie: &str) -> Request<Body> {
    Request::get("/whoami")
        .header(header::COOKIE, cookie)
        .header(header::USER_AGENT, USER_AGENT)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_resolve_session_attaches_principal() {
    let (repo, config) = setup();
    let auth = app(repo.clone(), config.clone());
    let cookie = register_and_sign_in(&auth).await;

    let protected = protected_app(repo, config);

    let response = protected.clone().oneshot(whoami_request(&cookie)).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"awa@example.com");

    let other_browser = Request::get("/whoami")
        .header(header::COOKIE, &cookie)
        .header(header::USER_AGENT, "curl/8.0")
        .body(Body::empty())
        .unwrap();
    let response = protected.oneshot(other_browser).await.unwrap();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"anonymous");
}

#[tokio::test]
async fn test_extended_session_reissues_cookie() {
    let (repo, config) = setup();
    let cookie = register_and_sign_in(&app(repo.clone(), config.clone())).await;
    let protected = protected_app(repo.clone(), config.clone());

    let response = protected.clone().oneshot(whoami_request(&cookie)).await.unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    // let the background activity update land
    tokio::task::yield_now().await;

    let (_, token) = cookie.split_once('=').unwrap();
    let session_id = config.parse_token(token).unwrap();
    let mut session = repo.find_session(&session_id).await.unwrap().unwrap();
    session.expires_at_ms = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp_millis();
    repo.touch_session(&session).await.unwrap();

    let response = protected.oneshot(whoami_request(&cookie)).await.unwrap();
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert_eq!(set_cookie.split(';').next().unwrap(), cookie);
    assert!(set_cookie.contains("Max-Age=43200"));

    tokio::task::yield_now().await;
    let session = repo.find_session(&session_id).await.unwrap().unwrap();
    assert!(session.remaining_ms() > chrono::Duration::hours(11).num_milliseconds());
}

#[tokio::test]
async fn test_sign_in_cookie_lasts_as_long_as_the_session() {
    let (repo, config) = setup();
    let app = app(repo, config);
    let cookie = register_and_sign_in(&app).await;

    let response = app
        .oneshot(post_json(
            "/auth/signin",
            json!({ "email": "awa@example.com", "password": PASSWORD }),
        ))
        .await
        .unwrap();
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("Max-Age=43200"));
    assert!(cookie.starts_with("auth_session="));
}
