//! Poll service: orchestrates poll operations and emits events.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::poll::{NewPoll, Poll, PollSummary};
use crate::domain::{EventBus, MemberId, OptionId, PollEvent, PollId, PollRegistry, ReactionPolicy};
use crate::error::PollError;

/// Outcome of a vote cast: the tallies a client needs to re-render.
#[derive(Debug, Clone, Copy)]
pub struct VoteOutcome {
    /// Option the member now holds.
    pub option_id: OptionId,
    /// New vote count of that option.
    pub option_votes: usize,
    /// New distinct-member total for the poll.
    pub total_votes: usize,
}

/// Orchestration layer for all poll operations.
///
/// Stateless coordinator: owns references to [`PollRegistry`] for state,
/// [`EventBus`] for event emission, and the [`ReactionPolicy`]. Every
/// mutation method follows the pattern: acquire lock → apply the poll
/// rule → emit event → return result.
#[derive(Debug, Clone)]
pub struct PollService {
    registry: Arc<PollRegistry>,
    event_bus: EventBus,
    reaction_policy: ReactionPolicy,
}

impl PollService {
    /// Creates a new `PollService`.
    #[must_use]
    pub fn new(
        registry: Arc<PollRegistry>,
        event_bus: EventBus,
        reaction_policy: ReactionPolicy,
    ) -> Self {
        Self {
            registry,
            event_bus,
            reaction_policy,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Returns a reference to the inner [`PollRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<PollRegistry> {
        &self.registry
    }

    /// Returns a reference to the configured [`ReactionPolicy`].
    #[must_use]
    pub fn reaction_policy(&self) -> &ReactionPolicy {
        &self.reaction_policy
    }

    /// Creates a new poll and inserts it at the head of the listing.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Validation`] when the title is blank or
    /// fewer than 2 usable options are given.
    pub async fn create_poll(&self, spec: NewPoll) -> Result<PollSummary, PollError> {
        let poll = Poll::new(spec)?;
        let summary = PollSummary::from(&poll);
        let poll_id = self.registry.insert(poll).await;

        let _ = self.event_bus.publish(PollEvent::PollCreated {
            poll_id,
            title: summary.title.clone(),
            option_count: summary.option_count,
            anonymous_voting: summary.anonymous_voting,
            timestamp: Utc::now(),
        });

        tracing::info!(%poll_id, title = %summary.title, "poll created");
        Ok(summary)
    }

    /// Records `member`'s vote for `option_id`, moving any previous vote.
    ///
    /// The membership collaborator is trusted to have validated the
    /// member; no group-membership check happens here.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::PollNotFound`] or [`PollError::OptionNotFound`]
    /// on stale references. The poll is left untouched on failure.
    pub async fn cast_vote(
        &self,
        poll_id: PollId,
        option_id: OptionId,
        member: &MemberId,
    ) -> Result<VoteOutcome, PollError> {
        let poll_lock = self.registry.get(poll_id).await?;
        let mut poll = poll_lock.write().await;

        poll.cast_vote(member, option_id)?;

        let option_votes = poll.option(option_id).map_or(0, |opt| opt.votes);
        let outcome = VoteOutcome {
            option_id,
            option_votes,
            total_votes: poll.total_votes,
        };

        // Published while the write lock is still held: events for one
        // poll leave the bus in mutation order.
        let _ = self.event_bus.publish(PollEvent::VoteCast {
            poll_id,
            option_id,
            option_votes: outcome.option_votes,
            total_votes: outcome.total_votes,
            timestamp: Utc::now(),
        });
        drop(poll);

        tracing::debug!(%poll_id, %option_id, total_votes = outcome.total_votes, "vote cast");
        Ok(outcome)
    }

    /// Adds one reaction to the poll and returns the new tally.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::DisallowedReaction`] for emoji outside the
    /// allow-list and [`PollError::PollNotFound`] for stale poll IDs.
    pub async fn add_reaction(&self, poll_id: PollId, emoji: &str) -> Result<u64, PollError> {
        self.reaction_policy.check(emoji)?;

        let poll_lock = self.registry.get(poll_id).await?;
        let mut poll = poll_lock.write().await;
        let count = poll.add_reaction(emoji);

        let _ = self.event_bus.publish(PollEvent::ReactionAdded {
            poll_id,
            emoji: emoji.to_string(),
            count,
            timestamp: Utc::now(),
        });
        drop(poll);

        Ok(count)
    }

    /// Flips a poll's pinned flag and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::PollNotFound`] if the poll does not exist.
    pub async fn toggle_pin(&self, poll_id: PollId) -> Result<bool, PollError> {
        let poll_lock = self.registry.get(poll_id).await?;
        let mut poll = poll_lock.write().await;
        let pinned = poll.toggle_pin();

        let _ = self.event_bus.publish(PollEvent::PinToggled {
            poll_id,
            pinned,
            timestamp: Utc::now(),
        });
        drop(poll);

        Ok(pinned)
    }

    /// Deletes a poll. Deleting an absent poll is a silent no-op; the
    /// event is only emitted when something was actually removed.
    pub async fn delete_poll(&self, poll_id: PollId) {
        if self.registry.remove(poll_id).await {
            let _ = self.event_bus.publish(PollEvent::PollDeleted {
                poll_id,
                timestamp: Utc::now(),
            });
            tracing::info!(%poll_id, "poll deleted");
        }
    }

    /// Returns summaries of all polls, pinned first then newest first.
    pub async fn list_polls(&self) -> Vec<PollSummary> {
        self.registry.list().await
    }

    /// Returns a full clone of the poll for detail rendering.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::PollNotFound`] if the poll does not exist.
    pub async fn get_poll(&self, poll_id: PollId) -> Result<Poll, PollError> {
        let poll_lock = self.registry.get(poll_id).await?;
        let poll = poll_lock.read().await;
        Ok(poll.clone())
    }
}
