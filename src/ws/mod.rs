//! WebSocket layer: connection handling, message routing, subscriptions.
//!
//! The WebSocket endpoint at `/ws` streams poll events (votes,
//! reactions, pins, lifecycle) to clients with per-poll subscription
//! filtering.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod subscription;
