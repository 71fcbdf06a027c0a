//! Poll aggregate: options, voter sets, tallies, and reactions.
//!
//! All voting rules live here. [`Poll::cast_vote`] enforces the
//! single-choice invariant: a member holds at most one vote across the
//! options of a poll, and `total_votes` always equals the number of
//! distinct members who have voted anywhere in the poll.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::PollId;
use crate::error::PollError;

/// Identifier of a member, as supplied by the membership collaborator.
///
/// Opaque to this crate: no group-membership check is performed here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a `MemberId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an option within its parent poll.
///
/// Assigned sequentially at poll creation (insertion order = display
/// order). Unique only within the poll, not globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(u32);

impl OptionId {
    /// Creates an `OptionId` from a raw index value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable choice within a poll.
#[derive(Debug, Clone, Serialize)]
pub struct PollOption {
    /// Option identifier, unique within the parent poll.
    pub id: OptionId,

    /// Non-empty option label.
    pub text: String,

    /// Number of members currently voting for this option.
    /// Always equals `voters.len()`.
    pub votes: usize,

    /// Members currently voting for this option. Tracked even when the
    /// poll uses anonymous voting; suppression happens at the DTO layer.
    pub voters: BTreeSet<MemberId>,
}

impl PollOption {
    fn new(id: OptionId, text: String) -> Self {
        Self {
            id,
            text,
            votes: 0,
            voters: BTreeSet::new(),
        }
    }
}

/// Creation parameters for a poll, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewPoll {
    /// Poll title. Trimmed; must be non-empty.
    pub title: String,
    /// Option labels. Blank entries are discarded; at least 2 must remain.
    pub options: Vec<String>,
    /// Optional event date (display-only).
    pub event_date: Option<NaiveDate>,
    /// Optional event time (display-only, free text such as `"19:30"`).
    pub event_time: Option<String>,
    /// Optional event location (display-only).
    pub location: Option<String>,
    /// When true, voter lists are hidden from API responses.
    pub anonymous_voting: bool,
}

/// A decision request posed to a group: a title and a fixed set of
/// mutually exclusive options.
///
/// Options are fixed at creation time; there is no add-option-later
/// operation. Reactions are scoped to the whole poll.
#[derive(Debug, Clone, Serialize)]
pub struct Poll {
    /// Unique poll identifier (immutable after creation).
    pub id: PollId,

    /// Non-empty poll title.
    pub title: String,

    /// Optional event date (display-only).
    pub event_date: Option<NaiveDate>,

    /// Optional event time (display-only).
    pub event_time: Option<String>,

    /// Optional event location (display-only).
    pub location: Option<String>,

    /// Options in display order.
    pub options: Vec<PollOption>,

    /// Number of distinct members with a vote anywhere in this poll.
    pub total_votes: usize,

    /// Whether voter identities are hidden from API responses.
    pub anonymous_voting: bool,

    /// Display-priority flag: pinned polls sort first in listings.
    pub pinned: bool,

    /// Emoji reaction tally, scoped to the whole poll. Additive-only;
    /// repeat reactions by the same member are not deduplicated.
    pub reactions: BTreeMap<String, u64>,

    /// Creation timestamp (immutable after creation).
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Validates creation parameters and builds a fresh poll.
    ///
    /// The title is trimmed and blank option entries are discarded
    /// before the minimum-of-two check.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Validation`] when the trimmed title is empty
    /// or fewer than 2 usable options remain.
    pub fn new(spec: NewPoll) -> Result<Self, PollError> {
        let title = spec.title.trim().to_string();
        if title.is_empty() {
            return Err(PollError::Validation(
                "poll title must not be empty".to_string(),
            ));
        }

        let options: Vec<PollOption> = spec
            .options
            .iter()
            .map(|text| text.trim())
            .filter(|text| !text.is_empty())
            .enumerate()
            .map(|(idx, text)| PollOption::new(OptionId::new(idx as u32), text.to_string()))
            .collect();

        if options.len() < 2 {
            return Err(PollError::Validation(format!(
                "poll needs at least 2 options, got {}",
                options.len()
            )));
        }

        Ok(Self {
            id: PollId::new(),
            title,
            event_date: spec.event_date,
            event_time: spec.event_time,
            location: spec.location,
            options,
            total_votes: 0,
            anonymous_voting: spec.anonymous_voting,
            pinned: false,
            reactions: BTreeMap::new(),
            created_at: Utc::now(),
        })
    }

    /// Returns the option with the given ID, if present.
    #[must_use]
    pub fn option(&self, option_id: OptionId) -> Option<&PollOption> {
        self.options.iter().find(|opt| opt.id == option_id)
    }

    /// Records a member's vote for one option, moving any previous vote.
    ///
    /// A member holds at most one vote per poll: any existing vote by
    /// `member` on another option is withdrawn first. Re-casting for the
    /// option the member already holds is a no-op. Per-option `votes`
    /// and the distinct-member `total_votes` are recomputed before
    /// returning, so the tallies are never observable in a stale state.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::OptionNotFound`] when `option_id` does not
    /// reference an option of this poll. The poll is left untouched.
    pub fn cast_vote(&mut self, member: &MemberId, option_id: OptionId) -> Result<(), PollError> {
        if self.option(option_id).is_none() {
            return Err(PollError::OptionNotFound {
                poll: *self.id.as_uuid(),
                option: option_id,
            });
        }

        for opt in &mut self.options {
            if opt.id == option_id {
                opt.voters.insert(member.clone());
            } else {
                opt.voters.remove(member);
            }
        }
        self.recount();
        Ok(())
    }

    /// Adds one reaction for `emoji` and returns its new count.
    ///
    /// Reactions are additive-only: there is no per-member identity, so
    /// the same member reacting twice counts twice. Allow-list checking
    /// happens in [`crate::domain::ReactionPolicy`] before this is called.
    pub fn add_reaction(&mut self, emoji: &str) -> u64 {
        let count = self.reactions.entry(emoji.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Flips the pinned flag and returns the new state.
    pub fn toggle_pin(&mut self) -> bool {
        self.pinned = !self.pinned;
        self.pinned
    }

    /// Recomputes per-option vote counts and the distinct-member total.
    fn recount(&mut self) {
        let mut distinct: BTreeSet<&MemberId> = BTreeSet::new();
        for opt in &self.options {
            distinct.extend(opt.voters.iter());
        }
        self.total_votes = distinct.len();
        for opt in &mut self.options {
            opt.votes = opt.voters.len();
        }
    }
}

/// Lightweight poll summary for list endpoints and events.
#[derive(Debug, Clone, Serialize)]
pub struct PollSummary {
    /// Poll identifier.
    pub id: PollId,
    /// Poll title.
    pub title: String,
    /// Pinned flag.
    pub pinned: bool,
    /// Whether voter identities are hidden.
    pub anonymous_voting: bool,
    /// Number of distinct members who have voted.
    pub total_votes: usize,
    /// Number of options.
    pub option_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Poll> for PollSummary {
    fn from(poll: &Poll) -> Self {
        Self {
            id: poll.id,
            title: poll.title.clone(),
            pinned: poll.pinned,
            anonymous_voting: poll.anonymous_voting,
            total_votes: poll.total_votes,
            option_count: poll.options.len(),
            created_at: poll.created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn make_poll(title: &str, options: &[&str]) -> Poll {
        let spec = NewPoll {
            title: title.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            ..NewPoll::default()
        };
        let Ok(poll) = Poll::new(spec) else {
            panic!("valid poll spec rejected");
        };
        poll
    }

    fn votes_of(poll: &Poll, option_id: OptionId) -> usize {
        let Some(opt) = poll.option(option_id) else {
            panic!("option missing");
        };
        opt.votes
    }

    #[test]
    fn empty_title_is_rejected() {
        let spec = NewPoll {
            title: "   ".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            ..NewPoll::default()
        };
        let result = Poll::new(spec);
        assert!(matches!(result, Err(PollError::Validation(_))));
    }

    #[test]
    fn single_option_is_rejected() {
        let spec = NewPoll {
            title: "T".to_string(),
            options: vec!["A".to_string()],
            ..NewPoll::default()
        };
        let result = Poll::new(spec);
        assert!(matches!(result, Err(PollError::Validation(_))));
    }

    #[test]
    fn blank_options_are_discarded_before_minimum_check() {
        let poll = make_poll("T", &["A", "B", "", "   "]);
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.total_votes, 0);
    }

    #[test]
    fn two_blank_plus_one_real_option_is_rejected() {
        let spec = NewPoll {
            title: "T".to_string(),
            options: vec!["A".to_string(), "".to_string(), " ".to_string()],
            ..NewPoll::default()
        };
        assert!(matches!(Poll::new(spec), Err(PollError::Validation(_))));
    }

    #[test]
    fn vote_for_unknown_option_fails_without_mutation() {
        let mut poll = make_poll("T", &["A", "B"]);
        let m = MemberId::new("m1");
        let result = poll.cast_vote(&m, OptionId::new(99));
        assert!(matches!(result, Err(PollError::OptionNotFound { .. })));
        assert_eq!(poll.total_votes, 0);
    }

    #[test]
    fn member_holds_at_most_one_vote() {
        let mut poll = make_poll("T", &["A", "B", "C"]);
        let m = MemberId::new("m1");

        for target in 0..3u32 {
            let Ok(()) = poll.cast_vote(&m, OptionId::new(target)) else {
                panic!("vote failed");
            };
            let holding: usize = poll
                .options
                .iter()
                .filter(|opt| opt.voters.contains(&m))
                .count();
            assert_eq!(holding, 1);
            assert_eq!(poll.total_votes, 1);
        }
    }

    #[test]
    fn revote_for_held_option_is_idempotent() {
        let mut poll = make_poll("T", &["A", "B"]);
        let m = MemberId::new("m1");
        let Ok(()) = poll.cast_vote(&m, OptionId::new(0)) else {
            panic!("vote failed");
        };
        let Ok(()) = poll.cast_vote(&m, OptionId::new(0)) else {
            panic!("re-vote failed");
        };
        assert_eq!(votes_of(&poll, OptionId::new(0)), 1);
        assert_eq!(poll.total_votes, 1);
    }

    #[test]
    fn total_votes_counts_distinct_members() {
        let mut poll = make_poll("Weekend?", &["Hike", "Movie"]);
        let m1 = MemberId::new("m1");
        let m2 = MemberId::new("m2");

        let Ok(()) = poll.cast_vote(&m1, OptionId::new(0)) else {
            panic!("vote failed");
        };
        assert_eq!(poll.total_votes, 1);
        assert_eq!(votes_of(&poll, OptionId::new(0)), 1);

        // m1 switches; the total must not grow
        let Ok(()) = poll.cast_vote(&m1, OptionId::new(1)) else {
            panic!("vote failed");
        };
        assert_eq!(poll.total_votes, 1);
        assert_eq!(votes_of(&poll, OptionId::new(0)), 0);
        assert_eq!(votes_of(&poll, OptionId::new(1)), 1);

        let Ok(()) = poll.cast_vote(&m2, OptionId::new(0)) else {
            panic!("vote failed");
        };
        assert_eq!(poll.total_votes, 2);
        assert_eq!(votes_of(&poll, OptionId::new(0)), 1);
        assert_eq!(votes_of(&poll, OptionId::new(1)), 1);
    }

    #[test]
    fn reactions_accumulate_per_emoji() {
        let mut poll = make_poll("T", &["A", "B"]);
        assert_eq!(poll.add_reaction("👍"), 1);
        assert_eq!(poll.add_reaction("👍"), 2);
        assert_eq!(poll.add_reaction("👍"), 3);
        assert_eq!(poll.add_reaction("🔥"), 1);
        assert_eq!(poll.reactions.get("👍"), Some(&3));
        assert_eq!(poll.reactions.get("🔥"), Some(&1));
    }

    #[test]
    fn toggle_pin_flips_state() {
        let mut poll = make_poll("T", &["A", "B"]);
        assert!(poll.toggle_pin());
        assert!(!poll.toggle_pin());
    }

    #[test]
    fn anonymous_flag_does_not_stop_tracking() {
        let spec = NewPoll {
            title: "T".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            anonymous_voting: true,
            ..NewPoll::default()
        };
        let Ok(mut poll) = Poll::new(spec) else {
            panic!("valid poll spec rejected");
        };
        let m = MemberId::new("m1");
        let Ok(()) = poll.cast_vote(&m, OptionId::new(0)) else {
            panic!("vote failed");
        };
        let Some(opt) = poll.option(OptionId::new(0)) else {
            panic!("option missing");
        };
        assert!(opt.voters.contains(&m));
        assert_eq!(poll.total_votes, 1);
    }
}
