//! Router tests

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use futures::StreamExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::config::I18nConfig;
use crate::hub::LocaleHub;
use crate::locale::Locale;
use crate::presentation::router::i18n_router;

fn app(hub: LocaleHub) -> axum::Router {
    i18n_router(hub, I18nConfig::development())
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn set_cookies(response: &axum::response::Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_get_locale_defaults_to_french_and_issues_client_key() {
    let response = app(LocaleHub::default())
        .oneshot(Request::get("/locale").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert!(cookies.iter().any(|c| c.starts_with("locale_client=")));

    let body = json_body(response).await;
    assert_eq!(body["locale"], "fr");
    assert_eq!(body["defaultLocale"], "fr");
    assert_eq!(body["locales"][1]["code"], "es");
    assert_eq!(body["locales"][1]["label"], "Español");
}

#[tokio::test]
async fn test_get_locale_reads_cookie() {
    let response = app(LocaleHub::default())
        .oneshot(
            Request::get("/locale")
                .header(header::COOKIE, "locale=es; locale_client=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(set_cookies(&response).is_empty());
    assert_eq!(json_body(response).await["locale"], "es");
}

#[tokio::test]
async fn test_set_locale_persists_cookie_and_notifies_listeners() {
    let hub = LocaleHub::default();
    let same_client = hub.subscribe("abc");
    futures::pin_mut!(same_client);

    let response = app(hub.clone())
        .oneshot(
            Request::post("/locale")
                .header(header::COOKIE, "locale_client=abc")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"locale":"es"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("locale=es"));
    assert!(!cookies[0].contains("HttpOnly"));

    assert_eq!(same_client.next().await, Some(Locale::Es));
}

#[tokio::test]
async fn test_set_locale_rejects_unsupported_in_current_language() {
    let response = app(LocaleHub::default())
        .oneshot(
            Request::post("/locale")
                .header(header::COOKIE, "locale=es")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"locale":"de"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["detail"], "Idioma no compatible: de");
}

#[tokio::test]
async fn test_translations_table_is_served() {
    let response = app(LocaleHub::default())
        .oneshot(Request::get("/i18n/es").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["locale"], "es");
    assert_eq!(body["messages"]["common"]["submit"], "Enviar");
}

#[tokio::test]
async fn test_translations_unknown_locale_is_bad_request() {
    let response = app(LocaleHub::default())
        .oneshot(Request::get("/i18n/xx").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_locale_events_stream_is_event_stream() {
    let hub = LocaleHub::default();
    let response = app(hub.clone())
        .oneshot(
            Request::get("/locale/events")
                .header(header::COOKIE, "locale_client=tab")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");
    assert_eq!(hub.listener_count(), 1);

    hub.publish("tab", Locale::Es);
    let mut body = response.into_body().into_data_stream();
    let chunk = body.next().await.unwrap().unwrap();
    let text = String::from_utf8(chunk.to_vec()).unwrap();
    assert!(text.contains("event: languageChange"));
    assert!(text.contains("data: es"));
}
