//! DTOs for vote, reaction, and pin endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{OptionId, PollId};
use crate::service::VoteOutcome;

/// Request body for `POST /polls/:id/votes`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CastVoteRequest {
    /// Identifier of the voting member, as issued by the membership
    /// collaborator.
    pub member_id: String,
    /// Option to vote for.
    pub option_id: u32,
}

/// Response body for `POST /polls/:id/votes`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CastVoteResponse {
    /// Poll identifier.
    #[schema(value_type = uuid::Uuid)]
    pub poll_id: PollId,
    /// Option the member now holds.
    #[schema(value_type = u32)]
    pub option_id: OptionId,
    /// New vote count of that option.
    pub option_votes: usize,
    /// New distinct-member total for the poll.
    pub total_votes: usize,
}

impl CastVoteResponse {
    /// Builds the response from a service-level vote outcome.
    #[must_use]
    pub fn from_outcome(poll_id: PollId, outcome: VoteOutcome) -> Self {
        Self {
            poll_id,
            option_id: outcome.option_id,
            option_votes: outcome.option_votes,
            total_votes: outcome.total_votes,
        }
    }
}

/// Request body for `POST /polls/:id/reactions`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddReactionRequest {
    /// Reaction emoji; must be in the configured allow-list.
    pub emoji: String,
}

/// Response body for `POST /polls/:id/reactions`.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddReactionResponse {
    /// Poll identifier.
    #[schema(value_type = uuid::Uuid)]
    pub poll_id: PollId,
    /// The reacted emoji.
    pub emoji: String,
    /// New tally for that emoji.
    pub count: u64,
}

/// Response body for `POST /polls/:id/pin`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TogglePinResponse {
    /// Poll identifier.
    #[schema(value_type = uuid::Uuid)]
    pub poll_id: PollId,
    /// New pinned state.
    pub pinned: bool,
}
