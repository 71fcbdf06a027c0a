//! System endpoints: health check and reaction catalog.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Reaction catalog response.
#[derive(Debug, Serialize, ToSchema)]
struct ReactionCatalogResponse {
    allowed: Vec<String>,
}

/// `GET /config/reactions` — List the allowed reaction emoji.
#[utoipa::path(
    get,
    path = "/config/reactions",
    tag = "System",
    summary = "List allowed reactions",
    description = "Returns every emoji the gateway accepts for poll reactions. Anything else is rejected with a 400.",
    responses(
        (status = 200, description = "Reaction catalog", body = ReactionCatalogResponse),
    )
)]
pub async fn reactions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let allowed = state
        .poll_service
        .reaction_policy()
        .allowed()
        .map(ToString::to_string)
        .collect();
    (StatusCode::OK, Json(ReactionCatalogResponse { allowed }))
}

/// System routes mounted at the root level (not under /api/v1).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/reactions", get(reactions_handler))
}
