use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::map_tracker_vm;

use super::actions::use_tracker_dispatcher;
use super::components::TrackerBoard;
use super::state::use_tracker_state;

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_tracker_state(&ctx.catalog());
    let dispatcher = use_tracker_dispatcher(state);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<super::test_harness::TrackerTestHandles>()
            {
                handles.register(dispatcher.dispatch);
            }
        }
    }

    // Percentages are recomputed from the toggle sets on every render.
    let vm = map_tracker_vm(&state.tracker.read());

    rsx! {
        TrackerBoard { vm, on_intent: dispatcher.dispatch }
    }
}
