//! Vote and reaction handlers.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{
    AddReactionRequest, AddReactionResponse, CastVoteRequest, CastVoteResponse,
};
use crate::app_state::AppState;
use crate::domain::{MemberId, OptionId, PollId};
use crate::error::{ErrorResponse, PollError};

/// `POST /polls/:id/votes` — Cast (or move) a member's vote.
///
/// A member holds at most one vote per poll; voting for a different
/// option moves the vote, voting for the held option is a no-op.
///
/// # Errors
///
/// Returns [`PollError::PollNotFound`] or [`PollError::OptionNotFound`]
/// on stale references.
#[utoipa::path(
    post,
    path = "/api/v1/polls/{id}/votes",
    tag = "Votes",
    summary = "Cast a vote",
    description = "Records the member's single vote for one option, withdrawing any previous vote in the same poll. Returns the new tallies.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    request_body = CastVoteRequest,
    responses(
        (status = 200, description = "Vote recorded; new tallies", body = CastVoteResponse),
        (status = 404, description = "Poll or option not found", body = ErrorResponse),
    )
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<CastVoteRequest>,
) -> Result<impl IntoResponse, PollError> {
    let poll_id = PollId::from_uuid(id);
    let member = MemberId::new(req.member_id);
    let outcome = state
        .poll_service
        .cast_vote(poll_id, OptionId::new(req.option_id), &member)
        .await?;
    Ok(Json(CastVoteResponse::from_outcome(poll_id, outcome)))
}

/// `POST /polls/:id/reactions` — Add a reaction to a poll.
///
/// Reactions are additive-only and not deduplicated per member.
///
/// # Errors
///
/// Returns [`PollError::DisallowedReaction`] for emoji outside the
/// allow-list and [`PollError::PollNotFound`] for stale poll IDs.
#[utoipa::path(
    post,
    path = "/api/v1/polls/{id}/reactions",
    tag = "Votes",
    summary = "Add a reaction",
    description = "Increments the tally for one emoji from the configured allow-list. Repeat reactions by the same member each count.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    request_body = AddReactionRequest,
    responses(
        (status = 200, description = "New tally for the emoji", body = AddReactionResponse),
        (status = 400, description = "Emoji not in the allow-list", body = ErrorResponse),
        (status = 404, description = "Poll not found", body = ErrorResponse),
    )
)]
pub async fn add_reaction(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
    Json(req): Json<AddReactionRequest>,
) -> Result<impl IntoResponse, PollError> {
    let poll_id = PollId::from_uuid(id);
    let count = state.poll_service.add_reaction(poll_id, &req.emoji).await?;
    Ok(Json(AddReactionResponse {
        poll_id,
        emoji: req.emoji,
        count,
    }))
}

/// Vote and reaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/polls/{id}/votes", post(cast_vote))
        .route("/polls/{id}/reactions", post(add_reaction))
}
