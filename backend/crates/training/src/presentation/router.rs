//! Training Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::TrainingConfig;
use crate::domain::repository::TrainingRepository;
use crate::presentation::handlers::{self, TrainingAppState};

/// Routes relative to the API root:
/// `/quiz`, `/quiz/submit`, `/quiz/result`, `/questionnaire`, `/questionnaire/form`,
/// `/certificate`, `/certinfo`
///
/// Session-bound routes expect the auth middleware to have run.
pub fn training_router<R: TrainingRepository>(
    repo: Arc<R>,
    config: Arc<TrainingConfig>,
) -> Router {
    let state = TrainingAppState { repo, config };

    Router::new()
        .route("/quiz", get(handlers::get_quiz))
        .route("/quiz/submit", post(handlers::submit_quiz::<R>))
        .route("/quiz/result", get(handlers::quiz_result::<R>))
        .route(
            "/questionnaire",
            get(handlers::get_questionnaire::<R>).post(handlers::submit_questionnaire::<R>),
        )
        .route("/questionnaire/form", get(handlers::questionnaire_form))
        .route("/certificate", get(handlers::download_certificate::<R>))
        .route(
            "/certinfo",
            get(handlers::get_issuance::<R>).post(handlers::record_issuance::<R>),
        )
        .with_state(state)
}
