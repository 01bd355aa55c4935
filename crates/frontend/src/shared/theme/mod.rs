//! Theme management module for the application.
//!
//! Wraps the [`ThemeStore`] state machine into a Leptos context. The store is
//! created at render time as `light`/not hydrated and hydrated once from an
//! effect, i.e. after the first render commit, so render output never depends
//! on client-only state. The pre-paint script in `index.html` already stamped
//! `data-theme`, which keeps the first paint flicker-free.

pub mod palette;
pub mod theme_toggle;

pub use palette::{hydrated_status_colour, ChartPalette};
pub use theme_toggle::ThemeToggle;

use anyhow::anyhow;
use contracts::shared::theme::{ThemeBackend, ThemePreference, ThemeStore};
use leptos::prelude::*;
use web_sys::window;

/// Browser side of the store: localStorage, `matchMedia` and `<html data-theme>`.
#[derive(Clone, Debug)]
pub struct BrowserThemeBackend {
    storage_key: String,
}

impl BrowserThemeBackend {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }
}

fn local_storage() -> anyhow::Result<web_sys::Storage> {
    let window = window().ok_or_else(|| anyhow!("no window"))?;
    window
        .local_storage()
        .map_err(|e| anyhow!("localStorage access denied: {e:?}"))?
        .ok_or_else(|| anyhow!("localStorage unavailable"))
}

impl ThemeBackend for BrowserThemeBackend {
    fn load(&self) -> anyhow::Result<Option<String>> {
        local_storage()?
            .get_item(&self.storage_key)
            .map_err(|e| anyhow!("getItem({}) failed: {e:?}", self.storage_key))
    }

    fn save(&self, theme: ThemePreference) -> anyhow::Result<()> {
        local_storage()?
            .set_item(&self.storage_key, theme.as_str())
            .map_err(|e| anyhow!("setItem({}) failed: {e:?}", self.storage_key))
    }

    fn prefers_dark(&self) -> anyhow::Result<bool> {
        let window = window().ok_or_else(|| anyhow!("no window"))?;
        let query = window
            .match_media("(prefers-color-scheme: dark)")
            .map_err(|e| anyhow!("matchMedia failed: {e:?}"))?;
        Ok(query.map(|q| q.matches()).unwrap_or(false))
    }

    fn apply(&self, theme: ThemePreference) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("theme: cannot set data-theme: {e:?}");
        }
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal, mirrors the store.
    pub theme: RwSignal<ThemePreference>,
    /// `false` until the post-mount hydration ran.
    pub is_hydrated: RwSignal<bool>,
    store: StoredValue<ThemeStore<BrowserThemeBackend>>,
}

impl ThemeContext {
    pub fn new(storage_key: String) -> Self {
        let store = ThemeStore::new(BrowserThemeBackend::new(storage_key));
        Self {
            theme: RwSignal::new(store.theme()),
            is_hydrated: RwSignal::new(store.is_hydrated()),
            store: StoredValue::new(store),
        }
    }

    /// Resolve persisted/system preference. Runs once; later calls are no-ops.
    pub fn hydrate(&self) {
        self.store.update_value(|store| {
            store.hydrate();
        });
        self.sync();
    }

    /// Set the theme and persist it once hydrated.
    pub fn set_theme(&self, theme: ThemePreference) {
        self.store.update_value(|store| store.set_theme(theme));
        self.sync();
    }

    pub fn toggle(&self) {
        self.store.update_value(|store| {
            store.toggle();
        });
        self.sync();
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> ThemePreference {
        self.theme.get()
    }

    fn sync(&self) {
        let (theme, hydrated) = self
            .store
            .with_value(|store| (store.theme(), store.is_hydrated()));
        self.theme.set(theme);
        self.is_hydrated.set(hydrated);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// localStorage key of the persisted preference
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    let context = ThemeContext::new(storage_key);
    provide_context(context);

    // Effects run after mount, never during render.
    Effect::new(move |_| {
        context.hydrate();
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
