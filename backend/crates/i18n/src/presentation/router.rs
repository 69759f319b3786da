//! i18n Router

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use crate::config::I18nConfig;
use crate::hub::LocaleHub;
use crate::presentation::handlers::{self, I18nAppState};

/// Routes relative to the API root:
/// `/locale`, `/locale/events`, `/i18n/{locale}`
pub fn i18n_router(hub: LocaleHub, config: I18nConfig) -> Router {
    let state = I18nAppState {
        hub,
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/locale",
            get(handlers::get_locale).post(handlers::set_locale),
        )
        .route("/locale/events", get(handlers::locale_events))
        .route("/i18n/{locale}", get(handlers::translations))
        .with_state(state)
}
