pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::sessions::SessionManager;
use crate::services::store::{MemoryProgressStore, ProgressStore};
use vocab_core::WordCatalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<WordCatalog>,
    pub progress: Arc<dyn ProgressStore>,
    pub sessions: Arc<SessionManager>,
}

impl AppState {
    /// State over the built-in catalog with fresh in-memory stores.
    pub fn with_builtin_catalog() -> Self {
        Self::new(WordCatalog::builtin())
    }

    pub fn new(catalog: WordCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            progress: Arc::new(MemoryProgressStore::new()),
            sessions: Arc::new(SessionManager::new()),
        }
    }
}

/// Build the application router. Kept separate from [`run`] so tests can
/// drive the same routes in-process.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Word routes
        .route("/api/words", get(routes::words::list))
        .route("/api/word/{term}", get(routes::words::find))
        // Progress routes
        .route("/api/progress", post(routes::progress::checkpoint))
        .route("/api/progress/{user_id}", get(routes::progress::get))
        .route("/api/progress/{user_id}", delete(routes::progress::reset))
        .route("/api/progress/{user_id}/levels", get(routes::progress::levels))
        // Session routes
        .route("/api/sessions", post(routes::sessions::start))
        .route("/api/sessions/{id}/question", get(routes::sessions::question))
        .route("/api/sessions/{id}/answer", post(routes::sessions::answer))
        .route("/api/sessions/{id}/summary", get(routes::sessions::summary))
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState::with_builtin_catalog();
    tracing::info!("Loaded word catalog with {} entries", state.catalog.len());

    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
