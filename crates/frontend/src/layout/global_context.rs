use crate::layout::pages::Page;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub left_open: RwSignal<bool>,
    pub right_open: RwSignal<bool>,
}

/// Page named by the `active` parameter of a location search string.
pub fn page_from_query(search: &str) -> Option<Page> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let key = params.get("active")?;
    let page = Page::from_key(key);
    if page.is_none() {
        log::warn!("router: unknown page key {key:?} in the url");
    }
    page
}

/// Search string selecting `page`, e.g. `?active=d400_ecommerce`.
pub fn query_for_page(page: Page) -> String {
    let query_string =
        serde_qs::to_string(&HashMap::from([("active", page.key())])).unwrap_or_default();
    format!("?{}", query_string)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            left_open: RwSignal::new(true),
            right_open: RwSignal::new(true),
        }
    }

    /// Restore the active page from the url, then keep the url in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_query(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = query_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
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

    /// Activate the page behind a sidebar key. Keys without a page are ignored.
    pub fn open_page(&self, key: &str) -> bool {
        match Page::from_key(key) {
            Some(page) => {
                log::debug!("open_page: {}", page.key());
                self.active.set(page);
                true
            }
            None => {
                log::debug!("open_page: no page behind {key:?}");
                false
            }
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|page| page.key() == key)
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn toggle_right(&self) {
        self.right_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
