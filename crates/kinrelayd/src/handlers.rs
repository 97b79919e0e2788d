//! Request handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Local;
use kinrelay_core::WebhookPayload;
use kinrelay_format::compose;
use serde_json::json;
use tracing::{error, info, warn};

use crate::server::AppState;

/// Process status and configuration-presence report
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let config = &state.config;
    Json(json!({
        "status": "OK",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Local::now().to_rfc3339(),
        "port": config.port,
        "chatwork_configured": state.notifier.is_configured(),
        "ai_provider": config.ai.provider,
        "ai_key_configured": config.ai.selected_key().is_some(),
    }))
}

/// kintone webhook entry point
pub async fn webhook(
    State(state): State<AppState>,
    Json(payload): Json<WebhookPayload>,
) -> Response {
    let Some(record) = payload.record.as_ref() else {
        warn!("Invalid webhook data: record is missing");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid webhook data" })),
        )
            .into_response();
    };

    let Some(kind) = payload.kind() else {
        info!("Skipping unsupported event type: {}", payload.event_type);
        return (
            StatusCode::OK,
            Json(json!({ "message": "Event type not supported" })),
        )
            .into_response();
    };

    info!(
        "Processing {} webhook for app {}",
        kind,
        payload.app_id().unwrap_or_else(|| "unknown".to_string())
    );

    // AI first when configured, deterministic fallback; the first
    // organizer producing text wins.
    let mut body = None;
    for organizer in state.organizers.iter() {
        if let Some(text) = organizer.organize(record).await {
            body = Some(text);
            break;
        }
    }
    let Some(body) = body else {
        error!("No organizer produced a message body");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Internal server error" })),
        )
            .into_response();
    };

    let message = compose(kind, record, &body, Local::now());

    match state.notifier.send(&message).await {
        Ok(message_id) => {
            info!("Notification {} delivered", message_id);
            (
                StatusCode::OK,
                Json(json!({ "message": "Success", "message_id": message_id })),
            )
                .into_response()
        }
        Err(e) => {
            // The webhook itself was valid and processed; report the
            // delivery failure without retrying.
            error!("Chat delivery failed: {}", e);
            (
                StatusCode::OK,
                Json(json!({
                    "message": "Processed but delivery failed",
                    "delivered": false,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
