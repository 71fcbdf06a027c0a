//! # poll-gateway
//!
//! REST API and WebSocket gateway for group-outing poll voting.
//!
//! This crate implements the poll voting engine for a group planning
//! application: members create polls with a fixed set of options, cast
//! a single vote each (moving it freely between options), react with
//! emoji, and pin polls to the top of the listing. Group membership,
//! authentication, and durable persistence are external collaborators —
//! this service is the in-memory source of truth for a session.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── PollService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     └── PollRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;
