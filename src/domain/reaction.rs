//! Reaction allow-list policy.
//!
//! Reactions use a fixed catalog of recognized emoji rather than
//! free-form input; anything outside the catalog is rejected before the
//! poll tally is touched.

use std::collections::BTreeSet;

use crate::error::PollError;

/// Default reaction catalog, matching the picker offered by clients.
pub const DEFAULT_REACTIONS: [&str; 6] = ["👍", "👎", "❤️", "🔥", "😂", "🎉"];

/// Set of emoji accepted by [`crate::service::PollService::add_reaction`].
#[derive(Debug, Clone)]
pub struct ReactionPolicy {
    allowed: BTreeSet<String>,
}

impl ReactionPolicy {
    /// Builds a policy from an explicit list of allowed emoji.
    ///
    /// Entries are trimmed; blank entries are ignored. An empty list
    /// falls back to [`DEFAULT_REACTIONS`].
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allowed: BTreeSet<String> = allowed
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if allowed.is_empty() {
            Self::default()
        } else {
            Self { allowed }
        }
    }

    /// Checks an emoji against the allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::DisallowedReaction`] when `emoji` is not in
    /// the catalog.
    pub fn check(&self, emoji: &str) -> Result<(), PollError> {
        if self.allowed.contains(emoji) {
            Ok(())
        } else {
            Err(PollError::DisallowedReaction(emoji.to_string()))
        }
    }

    /// Returns the allowed emoji in catalog order.
    pub fn allowed(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(String::as_str)
    }
}

impl Default for ReactionPolicy {
    fn default() -> Self {
        Self {
            allowed: DEFAULT_REACTIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_catalog_emoji() {
        let policy = ReactionPolicy::default();
        for emoji in DEFAULT_REACTIONS {
            assert!(policy.check(emoji).is_ok());
        }
    }

    #[test]
    fn unknown_emoji_is_rejected() {
        let policy = ReactionPolicy::default();
        let result = policy.check("🦀");
        assert!(matches!(result, Err(PollError::DisallowedReaction(_))));
    }

    #[test]
    fn custom_list_replaces_default() {
        let policy = ReactionPolicy::new(["🦀", "⭐"]);
        assert!(policy.check("🦀").is_ok());
        assert!(policy.check("👍").is_err());
    }

    #[test]
    fn blank_entries_fall_back_to_default() {
        let policy = ReactionPolicy::new(["", "   "]);
        assert!(policy.check("👍").is_ok());
    }
}
