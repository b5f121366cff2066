use std::sync::Arc;

pub trait UiApp: Send + Sync {
    /// The year the quiz opens on.
    fn starting_year(&self) -> i32;
}

#[derive(Clone)]
pub struct AppContext {
    starting_year: i32,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            starting_year: app.starting_year(),
        }
    }

    #[must_use]
    pub fn starting_year(&self) -> i32 {
        self.starting_year
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
