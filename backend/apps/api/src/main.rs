//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

mod config;

use std::sync::Arc;
use std::time::Duration;

use auth::domain::repository::SessionRepository;
use auth::{
    AuthMiddlewareState, AuthRepository, MemoryAuthRepository, PgAuthRepository, auth_router,
    resolve_session,
};
use axum::{
    Json, Router,
    http::{Method, header},
    middleware,
    routing::get,
};
use i18n::{LocaleHub, i18n_router};
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use training::{
    MemoryTrainingRepository, PgTrainingRepository, TrainingRepository, training_router,
};

use crate::config::ApiConfig;

/// How often expired sessions are purged
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,training=info,i18n=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    match config.database_url.clone() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            serve(
                config,
                Arc::new(PgAuthRepository::new(pool.clone())),
                Arc::new(PgTrainingRepository::new(pool)),
            )
            .await
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");
            serve(
                config,
                Arc::new(MemoryAuthRepository::new()),
                Arc::new(MemoryTrainingRepository::new()),
            )
            .await
        }
    }
}

async fn serve<A, T>(
    config: ApiConfig,
    auth_repo: Arc<A>,
    training_repo: Arc<T>,
) -> anyhow::Result<()>
where
    A: AuthRepository,
    T: TrainingRepository,
{
    spawn_session_cleanup(auth_repo.clone());

    let addr = config.bind_addr;
    let app = build_app(config, auth_repo, training_repo);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Purge expired sessions at startup, then periodically.
/// Failures are logged and never stop the server.
fn spawn_session_cleanup<A: AuthRepository>(repo: Arc<A>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match repo.cleanup_expired_sessions().await {
                Ok(sessions) => {
                    tracing::info!(sessions_deleted = sessions, "Auth session cleanup completed");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
                }
            }
        }
    });
}

fn build_app<A, T>(config: ApiConfig, auth_repo: Arc<A>, training_repo: Arc<T>) -> Router
where
    A: AuthRepository,
    T: TrainingRepository,
{
    let auth_config = Arc::new(config.auth);

    let session_layer = middleware::from_fn_with_state(
        AuthMiddlewareState {
            repo: auth_repo.clone(),
            config: auth_config.clone(),
        },
        resolve_session::<A>,
    );

    let api = Router::new()
        .merge(auth_router(auth_repo, auth_config))
        .merge(i18n_router(LocaleHub::default(), config.i18n))
        .merge(training_router(training_repo, Arc::new(config.training)))
        .layer(session_layer);

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ]))
        .allow_credentials(true);

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
