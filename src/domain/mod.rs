//! Domain layer: poll aggregate, registry, reaction policy, and events.
//!
//! This module contains the voting engine itself: poll identity, the
//! poll aggregate with its single-choice voting rule and reaction tally,
//! the event bus for broadcasting state changes, and the poll registry
//! for concurrent ordered storage.

pub mod event_bus;
pub mod poll;
pub mod poll_event;
pub mod poll_id;
pub mod poll_registry;
pub mod reaction;

pub use event_bus::EventBus;
pub use poll::{MemberId, NewPoll, OptionId, Poll, PollOption, PollSummary};
pub use poll_event::PollEvent;
pub use poll_id::PollId;
pub use poll_registry::PollRegistry;
pub use reaction::ReactionPolicy;
