//! Poll CRUD handlers: create, list, get, delete, pin.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    CreatePollRequest, CreatePollResponse, PaginationMeta, PaginationParams, PollDetailResponse,
    PollListResponse, PollSummaryDto, TogglePinResponse,
};
use crate::app_state::AppState;
use crate::domain::PollId;
use crate::error::{ErrorResponse, PollError};

/// `POST /polls` — Create a new poll.
///
/// # Errors
///
/// Returns [`PollError::Validation`] when the title is blank or fewer
/// than 2 usable options are given.
#[utoipa::path(
    post,
    path = "/api/v1/polls",
    tag = "Polls",
    summary = "Create a new poll",
    description = "Creates a poll from a title and at least two non-blank options. Blank options are discarded before validation. The new poll lands at the head of the listing.",
    request_body = CreatePollRequest,
    responses(
        (status = 201, description = "Poll created successfully", body = CreatePollResponse),
        (status = 400, description = "Blank title or fewer than 2 usable options", body = ErrorResponse),
    )
)]
pub async fn create_poll(
    State(state): State<AppState>,
    Json(req): Json<CreatePollRequest>,
) -> Result<impl IntoResponse, PollError> {
    let summary = state.poll_service.create_poll(req.into()).await?;
    Ok((StatusCode::CREATED, Json(CreatePollResponse::from(summary))))
}

/// `GET /polls` — List all polls, pinned first, with pagination.
#[utoipa::path(
    get,
    path = "/api/v1/polls",
    tag = "Polls",
    summary = "List polls",
    description = "Returns a paginated list of polls. Pinned polls sort before unpinned ones; within each partition the order is newest-first.",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated poll list", body = PollListResponse),
    )
)]
pub async fn list_polls(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Json<PollListResponse> {
    let params = params.clamped();
    let summaries = state.poll_service.list_polls().await;

    let total = summaries.len() as u32;
    let per_page = params.per_page;
    let page = params.page;
    let total_pages = if total == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let start = params.offset();
    let data: Vec<PollSummaryDto> = summaries
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .map(PollSummaryDto::from)
        .collect();

    Json(PollListResponse {
        data,
        pagination: PaginationMeta {
            page,
            per_page,
            total,
            total_pages,
        },
    })
}

/// `GET /polls/:id` — Get poll details.
///
/// Voter lists are omitted per option when the poll uses anonymous
/// voting; counts are always present.
///
/// # Errors
///
/// Returns [`PollError::PollNotFound`] if the poll does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/polls/{id}",
    tag = "Polls",
    summary = "Get poll details",
    description = "Returns the full poll: options with tallies, reactions, scheduling metadata. Voter lists are hidden for anonymous polls.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    responses(
        (status = 200, description = "Poll details", body = PollDetailResponse),
        (status = 404, description = "Poll not found", body = ErrorResponse),
    )
)]
pub async fn get_poll(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PollError> {
    let poll = state.poll_service.get_poll(PollId::from_uuid(id)).await?;
    Ok(Json(PollDetailResponse::from(poll)))
}

/// `DELETE /polls/:id` — Delete a poll.
///
/// Deletion is idempotent: deleting an already-removed poll also
/// returns 204.
#[utoipa::path(
    delete,
    path = "/api/v1/polls/{id}",
    tag = "Polls",
    summary = "Delete a poll",
    description = "Removes a poll. A second delete of the same poll is a no-op and still returns 204.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    responses(
        (status = 204, description = "Poll deleted (or already absent)"),
    )
)]
pub async fn delete_poll(State(state): State<AppState>, Path(id): Path<uuid::Uuid>) -> StatusCode {
    state.poll_service.delete_poll(PollId::from_uuid(id)).await;
    StatusCode::NO_CONTENT
}

/// `POST /polls/:id/pin` — Toggle a poll's pinned flag.
///
/// # Errors
///
/// Returns [`PollError::PollNotFound`] if the poll does not exist.
#[utoipa::path(
    post,
    path = "/api/v1/polls/{id}/pin",
    tag = "Polls",
    summary = "Toggle pin",
    description = "Flips the pinned flag. Pinned polls sort first in listings.",
    params(
        ("id" = uuid::Uuid, Path, description = "Poll UUID"),
    ),
    responses(
        (status = 200, description = "New pinned state", body = TogglePinResponse),
        (status = 404, description = "Poll not found", body = ErrorResponse),
    )
)]
pub async fn toggle_pin(
    State(state): State<AppState>,
    Path(id): Path<uuid::Uuid>,
) -> Result<impl IntoResponse, PollError> {
    let poll_id = PollId::from_uuid(id);
    let pinned = state.poll_service.toggle_pin(poll_id).await?;
    Ok(Json(TogglePinResponse { poll_id, pinned }))
}

/// Poll management routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/polls", post(create_poll).get(list_polls))
        .route("/polls/{id}", get(get_poll).delete(delete_poll))
        .route("/polls/{id}/pin", post(toggle_pin))
}
