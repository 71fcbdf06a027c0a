//! Per-connection subscription manager.
//!
//! Tracks which poll IDs a WebSocket client is subscribed to and
//! provides server-side event filtering.

use std::collections::HashSet;

use crate::domain::PollId;

/// Manages the set of poll subscriptions for a single WebSocket connection.
#[derive(Debug, Default)]
pub struct SubscriptionManager {
    /// Subscribed poll IDs. If `subscribe_all` is true, this set is ignored.
    poll_ids: HashSet<PollId>,
    /// Whether the client subscribes to all polls (wildcard `"*"`).
    subscribe_all: bool,
}

impl SubscriptionManager {
    /// Creates a new empty subscription manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds poll IDs to the subscription set. `"*"` enables the wildcard.
    pub fn subscribe(&mut self, ids: &[PollId], wildcard: bool) {
        if wildcard {
            self.subscribe_all = true;
        }
        for id in ids {
            self.poll_ids.insert(*id);
        }
    }

    /// Removes poll IDs from the subscription set.
    pub fn unsubscribe(&mut self, ids: &[PollId]) {
        for id in ids {
            self.poll_ids.remove(id);
        }
    }

    /// Returns `true` if the given poll ID matches the subscription filter.
    #[must_use]
    pub fn matches(&self, poll_id: PollId) -> bool {
        self.subscribe_all || self.poll_ids.contains(&poll_id)
    }

    /// Returns the number of explicitly subscribed poll IDs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.poll_ids.len()
    }

    /// Returns `true` if the wildcard subscription is active.
    #[must_use]
    pub fn is_subscribed_all(&self) -> bool {
        self.subscribe_all
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn empty_matches_nothing() {
        let mgr = SubscriptionManager::new();
        assert!(!mgr.matches(PollId::new()));
    }

    #[test]
    fn subscribe_specific_poll() {
        let mut mgr = SubscriptionManager::new();
        let id = PollId::new();
        mgr.subscribe(&[id], false);
        assert!(mgr.matches(id));
        assert!(!mgr.matches(PollId::new()));
    }

    #[test]
    fn wildcard_matches_everything() {
        let mut mgr = SubscriptionManager::new();
        mgr.subscribe(&[], true);
        assert!(mgr.matches(PollId::new()));
        assert!(mgr.matches(PollId::new()));
    }

    #[test]
    fn unsubscribe_removes_poll() {
        let mut mgr = SubscriptionManager::new();
        let id = PollId::new();
        mgr.subscribe(&[id], false);
        assert!(mgr.matches(id));
        mgr.unsubscribe(&[id]);
        assert!(!mgr.matches(id));
    }

    #[test]
    fn count_tracks_explicit() {
        let mut mgr = SubscriptionManager::new();
        assert_eq!(mgr.count(), 0);
        mgr.subscribe(&[PollId::new(), PollId::new()], false);
        assert_eq!(mgr.count(), 2);
    }
}
