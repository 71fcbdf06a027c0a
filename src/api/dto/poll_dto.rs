//! Poll-related DTOs for create, get, list, and delete operations.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common_dto::PaginationMeta;
use crate::domain::poll::{Poll, PollSummary};
use crate::domain::{NewPoll, PollId};

/// Request body for `POST /polls`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePollRequest {
    /// Poll title. Must be non-blank after trimming.
    pub title: String,
    /// Option labels. Blank entries are dropped; at least 2 must remain.
    pub options: Vec<String>,
    /// Optional event date, e.g. `"2026-09-12"`.
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    /// Optional event time, free text such as `"19:30"`.
    #[serde(default)]
    pub event_time: Option<String>,
    /// Optional event location.
    #[serde(default)]
    pub location: Option<String>,
    /// When true, voter lists are hidden in poll detail responses.
    #[serde(default)]
    pub anonymous_voting: bool,
}

impl From<CreatePollRequest> for NewPoll {
    fn from(req: CreatePollRequest) -> Self {
        Self {
            title: req.title,
            options: req.options,
            event_date: req.event_date,
            event_time: req.event_time,
            location: req.location,
            anonymous_voting: req.anonymous_voting,
        }
    }
}

/// Response body for `POST /polls` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePollResponse {
    /// Unique poll identifier.
    #[schema(value_type = uuid::Uuid)]
    pub poll_id: PollId,
    /// Poll title after trimming.
    pub title: String,
    /// Number of options kept after blank filtering.
    pub option_count: usize,
    /// Whether voter lists are hidden.
    pub anonymous_voting: bool,
    /// Server creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<PollSummary> for CreatePollResponse {
    fn from(summary: PollSummary) -> Self {
        Self {
            poll_id: summary.id,
            title: summary.title,
            option_count: summary.option_count,
            anonymous_voting: summary.anonymous_voting,
            created_at: summary.created_at,
        }
    }
}

/// Poll summary for list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct PollSummaryDto {
    /// Poll identifier.
    #[schema(value_type = uuid::Uuid)]
    pub poll_id: PollId,
    /// Poll title.
    pub title: String,
    /// Pinned flag.
    pub pinned: bool,
    /// Whether voter lists are hidden.
    pub anonymous_voting: bool,
    /// Number of distinct members who have voted.
    pub total_votes: usize,
    /// Number of options.
    pub option_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<PollSummary> for PollSummaryDto {
    fn from(summary: PollSummary) -> Self {
        Self {
            poll_id: summary.id,
            title: summary.title,
            pinned: summary.pinned,
            anonymous_voting: summary.anonymous_voting,
            total_votes: summary.total_votes,
            option_count: summary.option_count,
            created_at: summary.created_at,
        }
    }
}

/// Paginated list response for `GET /polls`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PollListResponse {
    /// Poll summaries for the requested page, pinned first.
    pub data: Vec<PollSummaryDto>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// One option within a poll detail response.
///
/// `voters` is omitted entirely for anonymous polls; the vote count is
/// always present.
#[derive(Debug, Serialize, ToSchema)]
pub struct PollOptionDto {
    /// Option identifier within the poll.
    pub id: u32,
    /// Option label.
    pub text: String,
    /// Current vote count.
    pub votes: usize,
    /// Voter identifiers, absent when the poll is anonymous.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voters: Option<Vec<String>>,
}

/// Full poll detail for `GET /polls/:id`.
#[derive(Debug, Serialize, ToSchema)]
pub struct PollDetailResponse {
    /// Poll identifier.
    #[schema(value_type = uuid::Uuid)]
    pub poll_id: PollId,
    /// Poll title.
    pub title: String,
    /// Optional event date.
    pub event_date: Option<NaiveDate>,
    /// Optional event time.
    pub event_time: Option<String>,
    /// Optional event location.
    pub location: Option<String>,
    /// Options in display order.
    pub options: Vec<PollOptionDto>,
    /// Number of distinct members who have voted.
    pub total_votes: usize,
    /// Whether voter lists are hidden.
    pub anonymous_voting: bool,
    /// Pinned flag.
    pub pinned: bool,
    /// Emoji reaction tally.
    pub reactions: BTreeMap<String, u64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Poll> for PollDetailResponse {
    fn from(poll: Poll) -> Self {
        let anonymous = poll.anonymous_voting;
        let options = poll
            .options
            .into_iter()
            .map(|opt| PollOptionDto {
                id: opt.id.get(),
                text: opt.text,
                votes: opt.votes,
                voters: if anonymous {
                    None
                } else {
                    Some(opt.voters.iter().map(|m| m.as_str().to_string()).collect())
                },
            })
            .collect();

        Self {
            poll_id: poll.id,
            title: poll.title,
            event_date: poll.event_date,
            event_time: poll.event_time,
            location: poll.location,
            options,
            total_votes: poll.total_votes,
            anonymous_voting: anonymous,
            pinned: poll.pinned,
            reactions: poll.reactions,
            created_at: poll.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::MemberId;
    use crate::domain::poll::OptionId;

    fn make_poll(anonymous: bool) -> Poll {
        let spec = NewPoll {
            title: "T".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            anonymous_voting: anonymous,
            ..NewPoll::default()
        };
        let Ok(mut poll) = Poll::new(spec) else {
            panic!("valid poll spec rejected");
        };
        let Ok(()) = poll.cast_vote(&MemberId::new("m1"), OptionId::new(0)) else {
            panic!("vote failed");
        };
        poll
    }

    #[test]
    fn anonymous_detail_hides_voters_but_keeps_counts() {
        let detail = PollDetailResponse::from(make_poll(true));
        let Some(opt) = detail.options.first() else {
            panic!("option missing");
        };
        assert!(opt.voters.is_none());
        assert_eq!(opt.votes, 1);
        assert_eq!(detail.total_votes, 1);

        let Ok(json) = serde_json::to_value(&detail) else {
            panic!("serialization failed");
        };
        let Some(first) = json
            .get("options")
            .and_then(|o| o.as_array())
            .and_then(|a| a.first())
        else {
            panic!("options missing from JSON");
        };
        assert!(first.get("voters").is_none());
    }

    #[test]
    fn public_detail_lists_voters() {
        let detail = PollDetailResponse::from(make_poll(false));
        let Some(opt) = detail.options.first() else {
            panic!("option missing");
        };
        assert_eq!(opt.voters.as_deref(), Some(&["m1".to_string()][..]));
    }
}
