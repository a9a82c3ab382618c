use std::sync::Arc;

use crate::model::{PhaseCatalog, PhaseIndex, TopicKey};
use crate::progress::{self, Percent};
use crate::state::{CompletionState, ExpansionState};

/// The tracker's whole state: an immutable catalog plus the two toggle stores.
///
/// One instance per mounted view. Nothing is shared or persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracker {
    catalog: Arc<PhaseCatalog>,
    completion: CompletionState,
    expansion: ExpansionState,
}

impl Tracker {
    /// Fresh tracker: nothing complete, first phase expanded.
    #[must_use]
    pub fn new(catalog: Arc<PhaseCatalog>) -> Self {
        let expansion = catalog
            .phase_index(0)
            .map_or_else(ExpansionState::collapsed, ExpansionState::with_expanded);
        Self {
            catalog,
            completion: CompletionState::new(),
            expansion,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &PhaseCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Flip a topic's completion flag. Returns the new flag.
    pub fn toggle_topic(&mut self, key: TopicKey) -> bool {
        let complete = self.completion.toggle(key);
        tracing::debug!(topic = %key, complete, "toggled topic");
        complete
    }

    /// Flip a phase panel's visibility. Returns whether it is now expanded.
    pub fn toggle_phase(&mut self, phase: PhaseIndex) -> bool {
        let expanded = self.expansion.toggle(phase);
        tracing::debug!(phase = %phase, expanded, "toggled phase panel");
        expanded
    }

    #[must_use]
    pub fn is_complete(&self, key: TopicKey) -> bool {
        self.completion.is_complete(key)
    }

    #[must_use]
    pub fn is_expanded(&self, phase: PhaseIndex) -> bool {
        self.expansion.is_expanded(phase)
    }

    #[must_use]
    pub fn completed_count(&self, phase: PhaseIndex) -> usize {
        self.completion.completed_in(phase)
    }

    #[must_use]
    pub fn phase_progress(&self, phase: PhaseIndex) -> Percent {
        progress::phase_progress(&self.catalog, &self.completion, phase)
    }

    #[must_use]
    pub fn overall_progress(&self) -> Percent {
        progress::overall_progress(&self.catalog, &self.completion)
    }
}
