use std::sync::Arc;

use tracker_core::model::PhaseCatalog;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<PhaseCatalog>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<PhaseCatalog>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<PhaseCatalog> {
        Arc::clone(&self.catalog)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
