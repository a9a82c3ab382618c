//! The two membership stores behind the tracker: completed topics and
//! expanded phase panels. Both start from a fixed default and only change
//! through explicit toggles.

use std::collections::BTreeSet;

use crate::model::{PhaseIndex, TopicKey};

/// Set of topics marked complete. Absence means "not complete".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionState {
    completed: BTreeSet<TopicKey>,
}

impl CompletionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `key`. Returns whether the topic is now complete.
    pub fn toggle(&mut self, key: TopicKey) -> bool {
        if self.completed.remove(&key) {
            false
        } else {
            self.completed.insert(key);
            true
        }
    }

    #[must_use]
    pub fn is_complete(&self, key: TopicKey) -> bool {
        self.completed.contains(&key)
    }

    /// Number of completed topics that belong to `phase`.
    #[must_use]
    pub fn completed_in(&self, phase: PhaseIndex) -> usize {
        self.completed
            .iter()
            .filter(|key| key.phase() == phase)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

/// Set of phases whose detail panel is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<PhaseIndex>,
}

impl ExpansionState {
    /// Start with only `first` expanded.
    #[must_use]
    pub fn with_expanded(first: PhaseIndex) -> Self {
        Self {
            expanded: BTreeSet::from([first]),
        }
    }

    #[must_use]
    pub fn collapsed() -> Self {
        Self {
            expanded: BTreeSet::new(),
        }
    }

    /// Flip visibility of `phase`. Returns whether the panel is now expanded.
    pub fn toggle(&mut self, phase: PhaseIndex) -> bool {
        if self.expanded.remove(&phase) {
            false
        } else {
            self.expanded.insert(phase);
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, phase: PhaseIndex) -> bool {
        self.expanded.contains(&phase)
    }
}
