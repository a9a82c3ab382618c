use std::fmt;

/// Position of a phase inside a `PhaseCatalog`.
///
/// Only the catalog mints these, so every value refers to a phase that exists.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhaseIndex(usize);

impl PhaseIndex {
    #[must_use]
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based position.
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// Composite key of a topic: its phase plus its zero-based position in that phase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicKey {
    phase: PhaseIndex,
    topic: usize,
}

impl TopicKey {
    #[must_use]
    pub(crate) fn new(phase: PhaseIndex, topic: usize) -> Self {
        Self { phase, topic }
    }

    #[must_use]
    pub fn phase(&self) -> PhaseIndex {
        self.phase
    }

    /// Returns the zero-based topic position within the phase.
    #[must_use]
    pub fn topic(&self) -> usize {
        self.topic
    }
}

impl fmt::Debug for PhaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseIndex({})", self.0)
    }
}

impl fmt::Debug for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicKey({}-{})", self.phase.0, self.topic)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for PhaseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.phase.0, self.topic)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
