//! HTTP server wiring

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use kinrelay_ai::AiOrganizer;
use kinrelay_chat::Notifier;
use kinrelay_core::Config;
use kinrelay_format::{DeterministicOrganizer, Organizer};

use crate::handlers;

/// Shared application state. Everything is immutable after startup, so
/// concurrent webhook invocations need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub notifier: Arc<dyn Notifier>,
    /// Body organizers in priority order; the first to produce text wins
    pub organizers: Arc<Vec<Box<dyn Organizer>>>,
}

impl AppState {
    pub fn new(config: Config, notifier: Arc<dyn Notifier>) -> Self {
        let ai = AiOrganizer::from_config(&config.ai);
        let organizers: Vec<Box<dyn Organizer>> =
            vec![Box::new(ai), Box::new(DeterministicOrganizer)];

        Self {
            config: Arc::new(config),
            notifier,
            organizers: Arc::new(organizers),
        }
    }
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/webhook/kintone", post(handlers::webhook))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
