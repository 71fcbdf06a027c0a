//! poll-gateway server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use poll_gateway::api;
use poll_gateway::app_state::AppState;
use poll_gateway::config::PollGatewayConfig;
use poll_gateway::domain::{EventBus, PollRegistry};
use poll_gateway::service::PollService;
use poll_gateway::ws::handler::ws_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = PollGatewayConfig::from_env()
        .map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;
    tracing::info!(addr = %config.listen_addr, "starting poll-gateway");

    // Build domain layer
    let registry = Arc::new(PollRegistry::new());
    let event_bus = EventBus::new(config.event_bus_capacity);

    // Build service layer
    let poll_service = Arc::new(PollService::new(
        registry,
        event_bus.clone(),
        config.reaction_policy(),
    ));

    // Build application state
    let app_state = AppState {
        poll_service,
        event_bus,
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    #[cfg(feature = "swagger-ui")]
    let app = {
        use utoipa::OpenApi;
        app.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
