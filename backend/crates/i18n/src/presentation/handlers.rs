//! HTTP Handlers

use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::StreamExt;
use platform::cookie::extract_cookie;

use crate::catalog;
use crate::config::I18nConfig;
use crate::error::{I18nError, LocalizeResult, Localized};
use crate::hub::{LocaleHub, new_client_key};
use crate::locale::Locale;
use crate::presentation::dto::{
    LocaleOption, LocaleResponse, SetLocaleRequest, TranslationsResponse,
};

/// Name of the server-sent event announcing a new locale
pub const LANGUAGE_CHANGE_EVENT: &str = "languageChange";

/// Shared state for i18n handlers
#[derive(Clone)]
pub struct I18nAppState {
    pub hub: LocaleHub,
    pub config: Arc<I18nConfig>,
}

/// The caller's client key, minting one (and its Set-Cookie) when absent
fn client_key(config: &I18nConfig, headers: &HeaderMap, out: &mut HeaderMap) -> String {
    if let Some(key) = extract_cookie(headers, &config.client_cookie.name) {
        return key;
    }

    let key = new_client_key();
    if let Some(cookie) = config.client_cookie.set_cookie_header(&key) {
        out.append(header::SET_COOKIE, cookie);
    }
    key
}

// ============================================================================
// Locale
// ============================================================================

/// GET /api/locale
pub async fn get_locale(
    State(state): State<I18nAppState>,
    headers: HeaderMap,
    locale: Locale,
) -> impl IntoResponse {
    let mut response_headers = HeaderMap::new();
    client_key(&state.config, &headers, &mut response_headers);

    (
        response_headers,
        Json(LocaleResponse {
            locale,
            default_locale: Locale::DEFAULT,
            locales: Locale::ALL.into_iter().map(LocaleOption::from).collect(),
        }),
    )
}

/// POST /api/locale
pub async fn set_locale(
    State(state): State<I18nAppState>,
    headers: HeaderMap,
    current: Locale,
    Json(req): Json<SetLocaleRequest>,
) -> Result<impl IntoResponse, Localized<I18nError>> {
    let locale: Locale = req.locale.parse().localize(current)?;

    let mut response_headers = HeaderMap::new();
    if let Some(cookie) = state.config.locale_cookie.set_cookie_header(locale.code()) {
        response_headers.append(header::SET_COOKIE, cookie);
    }

    let client = client_key(&state.config, &headers, &mut response_headers);
    let listeners = state.hub.publish(client, locale);

    tracing::info!(from = %current, to = %locale, listeners, "Locale changed");

    Ok((StatusCode::NO_CONTENT, response_headers))
}

/// GET /api/locale/events
///
/// Emits `languageChange` events whose data is the new locale code.
pub async fn locale_events(
    State(state): State<I18nAppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let mut response_headers = HeaderMap::new();
    let client = client_key(&state.config, &headers, &mut response_headers);

    tracing::debug!(listeners = state.hub.listener_count() + 1, "Locale listener connected");

    let events = state.hub.subscribe(client).map(|locale| {
        Ok::<_, Infallible>(
            Event::default()
                .event(LANGUAGE_CHANGE_EVENT)
                .data(locale.code()),
        )
    });

    let sse = Sse::new(events).keep_alive(KeepAlive::new().interval(state.config.keep_alive));

    (response_headers, sse)
}

// ============================================================================
// Translation tables
// ============================================================================

/// GET /api/i18n/{locale}
pub async fn translations(
    Path(code): Path<String>,
    current: Locale,
) -> Result<Json<TranslationsResponse>, Localized<I18nError>> {
    let locale: Locale = code.parse().localize(current)?;

    Ok(Json(TranslationsResponse {
        locale,
        messages: catalog::table(locale),
    }))
}
