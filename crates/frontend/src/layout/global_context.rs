use leptos::prelude::*;

/// UI state shared by the layout pieces
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Sidebar shows icons only
    pub sidebar_collapsed: RwSignal<bool>,
    /// Sidebar overlay is open on narrow screens
    pub mobile_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_collapsed: RwSignal::new(false),
            mobile_open: RwSignal::new(false),
        }
    }

    pub fn toggle_collapsed(&self) {
        self.sidebar_collapsed.update(|val| *val = !*val);
    }

    pub fn toggle_mobile(&self) {
        self.mobile_open.update(|val| *val = !*val);
    }

    pub fn close_mobile(&self) {
        self.mobile_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the layout context
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
