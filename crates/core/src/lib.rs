#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod progress;
pub mod state;
pub mod tracker;

pub use error::Error;
pub use progress::{Percent, overall_progress, phase_progress};
pub use state::{CompletionState, ExpansionState};
pub use tracker::Tracker;
