mod catalog;
mod ids;
mod phase;

pub use catalog::{CatalogError, PHASE_COUNT, PhaseCatalog};
pub use ids::{PhaseIndex, TopicKey};
pub use phase::{ColorTag, Phase, PhaseIcon};
