use std::sync::Arc;

use dioxus::prelude::*;
use tracker_core::Tracker;
use tracker_core::model::PhaseCatalog;

/// Component-local tracker state. One signal per mounted view.
#[derive(Clone, Copy)]
pub(crate) struct TrackerState {
    pub tracker: Signal<Tracker>,
}

pub(crate) fn use_tracker_state(catalog: &Arc<PhaseCatalog>) -> TrackerState {
    let catalog = Arc::clone(catalog);
    let tracker = use_signal(move || Tracker::new(catalog));
    TrackerState { tracker }
}
