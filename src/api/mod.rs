//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api/v1`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes())
}

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::poll::create_poll,
        handlers::poll::list_polls,
        handlers::poll::get_poll,
        handlers::poll::delete_poll,
        handlers::poll::toggle_pin,
        handlers::vote::cast_vote,
        handlers::vote::add_reaction,
        handlers::system::health_handler,
        handlers::system::reactions_handler,
    ),
    tags(
        (name = "Polls", description = "Poll lifecycle and listing"),
        (name = "Votes", description = "Voting and reactions"),
        (name = "System", description = "Health and configuration"),
    )
)]
pub struct ApiDoc;
