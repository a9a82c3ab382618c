use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use tracker_core::model::PhaseCatalog;

use crate::context::{UiApp, build_app_context};

use super::actions::TrackerIntent;
use super::view::TrackerView;

struct TestApp {
    catalog: Arc<PhaseCatalog>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<PhaseCatalog> {
        Arc::clone(&self.catalog)
    }
}

#[derive(Clone, Default)]
pub(crate) struct TrackerTestHandles {
    dispatch: Rc<RefCell<Option<Callback<TrackerIntent>>>>,
}

impl TrackerTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<TrackerIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<TrackerIntent> {
        (*self.dispatch.borrow()).expect("tracker dispatch registered")
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    catalog: Arc<PhaseCatalog>,
    handles: TrackerTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn TrackerHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        catalog: Arc::clone(&props.catalog),
    });
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { TrackerView {} }
}

pub(crate) struct TrackerHarnessDom {
    pub dom: VirtualDom,
    pub catalog: Arc<PhaseCatalog>,
    handles: TrackerTestHandles,
}

impl TrackerHarnessDom {
    pub(crate) fn send(&mut self, intent: TrackerIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub(crate) fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) fn setup_tracker_harness(catalog: PhaseCatalog) -> TrackerHarnessDom {
    let catalog = Arc::new(catalog);
    let handles = TrackerTestHandles::default();
    let mut dom = VirtualDom::new_with_props(
        TrackerHarness,
        HarnessProps {
            catalog: Arc::clone(&catalog),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    TrackerHarnessDom {
        dom,
        catalog,
        handles,
    }
}
