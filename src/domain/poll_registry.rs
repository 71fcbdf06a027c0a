//! Ordered poll storage with per-poll fine-grained locking.
//!
//! [`PollRegistry`] keeps polls in a most-recent-first sequence (new
//! polls go to the head) where each entry is individually protected by
//! a [`tokio::sync::RwLock`]. This allows concurrent reads on the same
//! poll and concurrent writes on different polls, while the sequence
//! preserves the order that pin-aware listing depends on.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::PollId;
use super::poll::{Poll, PollSummary};
use crate::error::PollError;

/// Central store for a group's polls.
///
/// The outer `RwLock<Vec<...>>` guards the ordering; each poll sits
/// behind its own `Arc<RwLock<Poll>>` for per-poll locking. The
/// immutable `PollId` is kept alongside each entry so lookups never
/// need to acquire a per-poll lock.
///
/// # Concurrency
///
/// - Multiple tasks may read the same poll concurrently.
/// - Writes to different polls are concurrent.
/// - Writes to the same poll are serialized, which is what keeps the
///   single-choice invariant safe under rapid vote casts.
#[derive(Debug, Default)]
pub struct PollRegistry {
    polls: RwLock<Vec<(PollId, Arc<RwLock<Poll>>)>>,
}

impl PollRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a poll at the head of the sequence (most-recent-first).
    pub async fn insert(&self, poll: Poll) -> PollId {
        let poll_id = poll.id;
        let mut seq = self.polls.write().await;
        seq.insert(0, (poll_id, Arc::new(RwLock::new(poll))));
        poll_id
    }

    /// Returns a shared handle to the poll behind its per-poll lock.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::PollNotFound`] if no poll with the given ID
    /// exists.
    pub async fn get(&self, poll_id: PollId) -> Result<Arc<RwLock<Poll>>, PollError> {
        let seq = self.polls.read().await;
        seq.iter()
            .find(|(id, _)| *id == poll_id)
            .map(|(_, lock)| Arc::clone(lock))
            .ok_or(PollError::PollNotFound(*poll_id.as_uuid()))
    }

    /// Removes a poll, returning `true` if it was present.
    ///
    /// Deleting an absent poll is an intentional no-op, not an error:
    /// stale delete requests must never fail.
    pub async fn remove(&self, poll_id: PollId) -> bool {
        let mut seq = self.polls.write().await;
        let before = seq.len();
        seq.retain(|(id, _)| *id != poll_id);
        seq.len() != before
    }

    /// Returns summaries of all polls, pinned first.
    ///
    /// The sort is stable, so within the pinned and unpinned partitions
    /// the most-recent-first insertion order is preserved.
    pub async fn list(&self) -> Vec<PollSummary> {
        let seq = self.polls.read().await;
        let mut summaries = Vec::with_capacity(seq.len());
        for (_, lock) in seq.iter() {
            let poll = lock.read().await;
            summaries.push(PollSummary::from(&*poll));
        }
        summaries.sort_by_key(|s| !s.pinned);
        summaries
    }

    /// Returns the number of polls in the registry.
    pub async fn len(&self) -> usize {
        self.polls.read().await.len()
    }

    /// Returns `true` if the registry contains no polls.
    pub async fn is_empty(&self) -> bool {
        self.polls.read().await.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::poll::NewPoll;

    fn make_poll(title: &str) -> Poll {
        let spec = NewPoll {
            title: title.to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            ..NewPoll::default()
        };
        let Ok(poll) = Poll::new(spec) else {
            panic!("valid poll spec rejected");
        };
        poll
    }

    #[tokio::test]
    async fn insert_and_get() {
        let registry = PollRegistry::new();
        let id = registry.insert(make_poll("T")).await;

        let fetched = registry.get(id).await;
        assert!(fetched.is_ok());
    }

    #[tokio::test]
    async fn get_nonexistent_returns_error() {
        let registry = PollRegistry::new();
        let result = registry.get(PollId::new()).await;
        assert!(matches!(result, Err(PollError::PollNotFound(_))));
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let registry = PollRegistry::new();
        let id = registry.insert(make_poll("T")).await;

        assert!(registry.remove(id).await);
        assert!(registry.get(id).await.is_err());
        // Second delete of the same poll must not fail
        assert!(!registry.remove(id).await);
    }

    #[tokio::test]
    async fn remove_nonexistent_is_noop() {
        let registry = PollRegistry::new();
        assert!(!registry.remove(PollId::new()).await);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let registry = PollRegistry::new();
        let first = registry.insert(make_poll("first")).await;
        let second = registry.insert(make_poll("second")).await;

        let list = registry.list().await;
        let ids: Vec<PollId> = list.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn pinned_polls_sort_first_and_ties_stay_stable() {
        let registry = PollRegistry::new();
        // Inserted P1, P2, P3; listing order before pinning: P3, P2, P1
        let p1 = registry.insert(make_poll("P1")).await;
        let p2 = registry.insert(make_poll("P2")).await;
        let p3 = registry.insert(make_poll("P3")).await;

        let Ok(lock) = registry.get(p2).await else {
            panic!("poll missing");
        };
        lock.write().await.toggle_pin();

        let list = registry.list().await;
        let ids: Vec<PollId> = list.iter().map(|s| s.id).collect();
        // P2 first; P3 and P1 keep their relative (newest-first) order
        assert_eq!(ids, vec![p2, p3, p1]);
    }

    #[tokio::test]
    async fn len_and_is_empty() {
        let registry = PollRegistry::new();
        assert!(registry.is_empty().await);
        assert_eq!(registry.len().await, 0);

        let _ = registry.insert(make_poll("T")).await;
        assert!(!registry.is_empty().await);
        assert_eq!(registry.len().await, 1);
    }
}
