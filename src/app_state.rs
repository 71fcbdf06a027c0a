//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::EventBus;
use crate::service::PollService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Poll service for all business logic.
    pub poll_service: Arc<PollService>,
    /// Event bus for WebSocket subscriptions.
    pub event_bus: EventBus,
}
