//! Domain events reflecting poll state mutations.
//!
//! Every state change emits a [`PollEvent`] through the
//! [`super::EventBus`]. Events are broadcast to WebSocket subscribers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::PollId;
use super::poll::OptionId;

/// Domain event emitted after every state mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PollEvent {
    /// Emitted when a new poll is created.
    PollCreated {
        /// Poll identifier.
        poll_id: PollId,
        /// Poll title.
        title: String,
        /// Number of options.
        option_count: usize,
        /// Whether voter lists are hidden.
        anonymous_voting: bool,
        /// Creation timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted when a poll is deleted.
    PollDeleted {
        /// Poll identifier.
        poll_id: PollId,
        /// Deletion timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a vote is recorded (including moved votes).
    VoteCast {
        /// Poll identifier.
        poll_id: PollId,
        /// Option the member now holds.
        option_id: OptionId,
        /// New vote count of that option.
        option_votes: usize,
        /// New distinct-member total for the poll.
        total_votes: usize,
        /// Vote timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a reaction is added.
    ReactionAdded {
        /// Poll identifier.
        poll_id: PollId,
        /// Reaction emoji.
        emoji: String,
        /// New tally for that emoji.
        count: u64,
        /// Reaction timestamp.
        timestamp: DateTime<Utc>,
    },

    /// Emitted after a pin toggle.
    PinToggled {
        /// Poll identifier.
        poll_id: PollId,
        /// New pinned state.
        pinned: bool,
        /// Toggle timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl PollEvent {
    /// Returns the poll this event refers to.
    #[must_use]
    pub const fn poll_id(&self) -> PollId {
        match self {
            Self::PollCreated { poll_id, .. }
            | Self::PollDeleted { poll_id, .. }
            | Self::VoteCast { poll_id, .. }
            | Self::ReactionAdded { poll_id, .. }
            | Self::PinToggled { poll_id, .. } => *poll_id,
        }
    }

    /// Returns the snake_case discriminator string for this event.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::PollCreated { .. } => "poll_created",
            Self::PollDeleted { .. } => "poll_deleted",
            Self::VoteCast { .. } => "vote_cast",
            Self::ReactionAdded { .. } => "reaction_added",
            Self::PinToggled { .. } => "pin_toggled",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn event_type_matches_serialized_tag() {
        let event = PollEvent::PollDeleted {
            poll_id: PollId::new(),
            timestamp: Utc::now(),
        };
        let Ok(json) = serde_json::to_value(&event) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json.get("event_type").and_then(|v| v.as_str()),
            Some(event.event_type_str())
        );
    }

    #[test]
    fn poll_id_accessor_covers_all_variants() {
        let id = PollId::new();
        let events = [
            PollEvent::PollCreated {
                poll_id: id,
                title: "T".to_string(),
                option_count: 2,
                anonymous_voting: false,
                timestamp: Utc::now(),
            },
            PollEvent::VoteCast {
                poll_id: id,
                option_id: OptionId::new(0),
                option_votes: 1,
                total_votes: 1,
                timestamp: Utc::now(),
            },
            PollEvent::ReactionAdded {
                poll_id: id,
                emoji: "👍".to_string(),
                count: 1,
                timestamp: Utc::now(),
            },
            PollEvent::PinToggled {
                poll_id: id,
                pinned: true,
                timestamp: Utc::now(),
            },
        ];
        for event in events {
            assert_eq!(event.poll_id(), id);
        }
    }
}
