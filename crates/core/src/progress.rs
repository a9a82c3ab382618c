//! Completion percentages derived from a catalog and a completion state.
//!
//! Percentages are never stored; every read recomputes them. Rounding is
//! round-half-up, done in integer arithmetic.

use std::fmt;

use crate::model::{PhaseCatalog, PhaseIndex};
use crate::state::CompletionState;

/// Whole-number percentage in `0..=100`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    /// `round(100 * part / whole)`, half-up. An empty whole is zero.
    #[must_use]
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part.min(whole);
        let rounded = (200 * part + whole) / (2 * whole);
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    /// Unweighted mean of `values`, rounded half-up. Empty input is zero.
    #[must_use]
    pub fn mean(values: impl IntoIterator<Item = Percent>) -> Self {
        let (sum, count) = values
            .into_iter()
            .fold((0usize, 0usize), |(sum, count), p| {
                (sum + usize::from(p.0), count + 1)
            });
        if count == 0 {
            return Self::ZERO;
        }
        let rounded = (2 * sum + count) / (2 * count);
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Percent({})", self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Share of `phase`'s topics that are complete.
#[must_use]
pub fn phase_progress(
    catalog: &PhaseCatalog,
    completion: &CompletionState,
    phase: PhaseIndex,
) -> Percent {
    let total = catalog.phase(phase).map_or(0, |p| p.topics().len());
    let done = catalog
        .topics(phase)
        .filter(|(key, _)| completion.is_complete(*key))
        .count();
    Percent::of(done, total)
}

/// Mean of the per-phase percentages.
///
/// Every phase counts once regardless of how many topics it has.
#[must_use]
pub fn overall_progress(catalog: &PhaseCatalog, completion: &CompletionState) -> Percent {
    Percent::mean(
        catalog
            .phase_indices()
            .map(|phase| phase_progress(catalog, completion, phase)),
    )
}
