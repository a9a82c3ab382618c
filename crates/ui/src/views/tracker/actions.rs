use dioxus::prelude::*;
use tracker_core::model::{PhaseIndex, TopicKey};

use super::state::TrackerState;

/// Every click on the page maps to exactly one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerIntent {
    ToggleTopic(TopicKey),
    TogglePhase(PhaseIndex),
}

#[derive(Clone, Copy)]
pub(crate) struct TrackerDispatcher {
    pub dispatch: Callback<TrackerIntent>,
}

pub(crate) fn use_tracker_dispatcher(state: TrackerState) -> TrackerDispatcher {
    let mut tracker = state.tracker;
    let dispatch = use_callback(move |intent: TrackerIntent| match intent {
        TrackerIntent::ToggleTopic(key) => {
            tracker.write().toggle_topic(key);
        }
        TrackerIntent::TogglePhase(phase) => {
            tracker.write().toggle_phase(phase);
        }
    });
    TrackerDispatcher { dispatch }
}
