//! Service layer: business logic orchestration.

pub mod poll_service;

pub use poll_service::{PollService, VoteOutcome};
