use contracts::domain::a001_customer::aggregate::CustomerSuggestion;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::shared::{analytics, storage};

const SIDEBAR_STORAGE_KEY: &str = "sidebarCollapsed";
/// At or below this width the sidebar is always shown expanded
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Top-level pages reachable from the sidebar and `Ctrl+1..5`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Billing,
    Inventory,
    Customers,
    Settings,
}

impl Page {
    pub fn all() -> [Page; 5] {
        [
            Page::Dashboard,
            Page::Billing,
            Page::Inventory,
            Page::Customers,
            Page::Settings,
        ]
    }

    /// Key used in the `?page=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Billing => "billing",
            Page::Inventory => "inventory",
            Page::Customers => "customers",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Billing => "Billing",
            Page::Inventory => "Inventory",
            Page::Customers => "Customers",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Billing => "billing",
            Page::Inventory => "inventory",
            Page::Customers => "customers",
            Page::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        Page::all().into_iter().find(|p| p.key() == key)
    }

    /// `Ctrl+1` .. `Ctrl+5`
    pub fn from_shortcut(key: &str) -> Option<Page> {
        let index: usize = key.parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| Page::all().get(i).copied())
    }
}

/// Sidebar starts collapsed only when the user left it collapsed and the
/// viewport is wider than the mobile breakpoint.
pub fn initial_sidebar_collapsed(saved: Option<bool>, viewport_width: f64) -> bool {
    saved.unwrap_or(false) && viewport_width > MOBILE_BREAKPOINT_PX
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    /// false = sidebar collapsed to icons
    pub left_open: RwSignal<bool>,
    /// Customer picked on another page, consumed by the billing workflow
    pub pending_customer: RwSignal<Option<CustomerSuggestion>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let collapsed =
            initial_sidebar_collapsed(storage::get_bool(SIDEBAR_STORAGE_KEY), viewport_width());
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(!collapsed),
            pending_customer: RwSignal::new(None),
        }
    }

    /// Read `?page=` once and keep the query string in sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("page".to_string(), page.key().to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: Page) {
        if self.active.get_untracked() == page {
            return;
        }
        log::debug!("navigate: {}", page.key());
        self.active.set(page);
        analytics::track("page_navigation", serde_json::json!({ "page": page.key() }));
    }

    /// Jump to billing with a customer already chosen.
    pub fn start_billing_for(&self, customer: CustomerSuggestion) {
        self.pending_customer.set(Some(customer));
        self.navigate(Page::Billing);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
        let collapsed = !self.left_open.get_untracked();
        storage::set_bool(SIDEBAR_STORAGE_KEY, collapsed);
    }

    /// Resize handler: below the breakpoint force-expand, above it restore the
    /// saved preference.
    pub fn apply_viewport(&self, width: f64) {
        let collapsed = initial_sidebar_collapsed(storage::get_bool(SIDEBAR_STORAGE_KEY), width);
        if self.left_open.get_untracked() == collapsed {
            self.left_open.set(!collapsed);
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in Page::all() {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("reports"), None);
    }

    #[test]
    fn test_shortcut_digits() {
        assert_eq!(Page::from_shortcut("1"), Some(Page::Dashboard));
        assert_eq!(Page::from_shortcut("2"), Some(Page::Billing));
        assert_eq!(Page::from_shortcut("5"), Some(Page::Settings));
        assert_eq!(Page::from_shortcut("0"), None);
        assert_eq!(Page::from_shortcut("6"), None);
        assert_eq!(Page::from_shortcut("b"), None);
    }

    #[test]
    fn test_sidebar_never_starts_collapsed_on_mobile() {
        assert!(initial_sidebar_collapsed(Some(true), 1280.0));
        assert!(!initial_sidebar_collapsed(Some(true), 768.0));
        assert!(!initial_sidebar_collapsed(Some(false), 1280.0));
        assert!(!initial_sidebar_collapsed(None, 1280.0));
    }
}
