//! Light/dark theme store.
//!
//! The store starts `Uninitialized` and is hydrated exactly once after the
//! first render: persisted value first, then the system colour scheme, then
//! `light` when anything fails. From then on every transition is persisted and
//! stamped onto the document through a [`ThemeBackend`].

use serde::{Deserialize, Serialize};

/// localStorage key read by the inline pre-paint script of `index.html`.
pub const PREPAINT_STORAGE_KEY: &str = "theme";

/// Available themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Returns the theme name as stored and as stamped into `data-theme`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Strict parse: anything other than `light`/`dark` is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ThemePreference::Dark
    }
}

/// Environment the store talks to: client storage, the OS colour scheme and
/// the document root.
pub trait ThemeBackend {
    /// Raw persisted value, `None` when nothing was stored.
    fn load(&self) -> anyhow::Result<Option<String>>;

    fn save(&self, theme: ThemePreference) -> anyhow::Result<()>;

    /// `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> anyhow::Result<bool>;

    /// Stamps the theme on the document root for CSS.
    fn apply(&self, theme: ThemePreference);
}

/// Hydration state of the store.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ThemeState {
    /// Before the first render commit; holds the render-time value.
    Uninitialized(ThemePreference),
    Hydrated(ThemePreference),
}

impl ThemeState {
    pub fn theme(&self) -> ThemePreference {
        match *self {
            ThemeState::Uninitialized(theme) | ThemeState::Hydrated(theme) => theme,
        }
    }
}

/// Resolves the initial theme. Any backend error falls back to `light`.
pub fn resolve_initial<B: ThemeBackend + ?Sized>(backend: &B) -> ThemePreference {
    match try_resolve(backend) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("theme: cannot read preference, using light: {e:#}");
            ThemePreference::Light
        }
    }
}

fn try_resolve<B: ThemeBackend + ?Sized>(backend: &B) -> anyhow::Result<ThemePreference> {
    if let Some(stored) = backend.load()? {
        if let Some(theme) = ThemePreference::parse(&stored) {
            return Ok(theme);
        }
        log::debug!("theme: ignoring stored value {stored:?}");
    }
    Ok(if backend.prefers_dark()? {
        ThemePreference::Dark
    } else {
        ThemePreference::Light
    })
}

/// Explicitly constructed theme store, one per application root.
#[derive(Debug)]
pub struct ThemeStore<B: ThemeBackend> {
    backend: B,
    state: ThemeState,
}

impl<B: ThemeBackend> ThemeStore<B> {
    /// Render-time store: `light`, not hydrated, nothing touched yet.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ThemeState::Uninitialized(ThemePreference::default()),
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn theme(&self) -> ThemePreference {
        self.state.theme()
    }

    pub fn is_hydrated(&self) -> bool {
        matches!(self.state, ThemeState::Hydrated(_))
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// One-shot post-mount transition. Later calls are no-ops.
    pub fn hydrate(&mut self) -> ThemePreference {
        if let ThemeState::Hydrated(theme) = self.state {
            return theme;
        }
        let theme = resolve_initial(&self.backend);
        log::debug!("theme: hydrated as {}", theme.as_str());
        self.state = ThemeState::Hydrated(theme);
        self.backend.apply(theme);
        self.persist(theme);
        theme
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.state = match self.state {
            ThemeState::Uninitialized(_) => ThemeState::Uninitialized(theme),
            ThemeState::Hydrated(_) => ThemeState::Hydrated(theme),
        };
        self.backend.apply(theme);
        // Writes before hydration would clobber the stored preference.
        if self.is_hydrated() {
            self.persist(theme);
        }
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = self.theme().toggled();
        self.set_theme(next);
        next
    }

    fn persist(&self, theme: ThemePreference) {
        if let Err(e) = self.backend.save(theme) {
            log::warn!("theme: cannot persist {}: {e:#}", theme.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryBackend {
        stored: RefCell<Option<String>>,
        system_dark: bool,
        read_fails: bool,
        write_fails: bool,
        system_fails: bool,
        applied: RefCell<Vec<ThemePreference>>,
    }

    impl ThemeBackend for MemoryBackend {
        fn load(&self) -> anyhow::Result<Option<String>> {
            if self.read_fails {
                return Err(anyhow!("storage disabled"));
            }
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, theme: ThemePreference) -> anyhow::Result<()> {
            if self.write_fails {
                return Err(anyhow!("quota exceeded"));
            }
            *self.stored.borrow_mut() = Some(theme.as_str().to_string());
            Ok(())
        }

        fn prefers_dark(&self) -> anyhow::Result<bool> {
            if self.system_fails {
                return Err(anyhow!("matchMedia unavailable"));
            }
            Ok(self.system_dark)
        }

        fn apply(&self, theme: ThemePreference) {
            self.applied.borrow_mut().push(theme);
        }
    }

    fn stored(value: &str) -> RefCell<Option<String>> {
        RefCell::new(Some(value.to_string()))
    }

    #[test]
    fn test_starts_uninitialized_light() {
        let store = ThemeStore::new(MemoryBackend::default());
        assert_eq!(store.theme(), ThemePreference::Light);
        assert!(!store.is_hydrated());
        assert!(store.backend().applied.borrow().is_empty());
    }

    #[test]
    fn test_hydrate_from_system_preference() {
        let mut store = ThemeStore::new(MemoryBackend {
            system_dark: true,
            ..Default::default()
        });
        assert_eq!(store.hydrate(), ThemePreference::Dark);
        assert!(store.is_hydrated());
        assert_eq!(store.theme(), ThemePreference::Dark);
        assert_eq!(*store.backend().applied.borrow(), vec![ThemePreference::Dark]);
        assert_eq!(store.backend().stored.borrow().as_deref(), Some("dark"));
    }

    #[test]
    fn test_stored_value_wins_over_system() {
        let mut store = ThemeStore::new(MemoryBackend {
            stored: stored("light"),
            system_dark: true,
            ..Default::default()
        });
        assert_eq!(store.hydrate(), ThemePreference::Light);
    }

    #[test]
    fn test_invalid_stored_value_falls_back_to_system() {
        let mut store = ThemeStore::new(MemoryBackend {
            stored: stored("forest"),
            system_dark: true,
            ..Default::default()
        });
        assert_eq!(store.hydrate(), ThemePreference::Dark);
    }

    #[test]
    fn test_storage_read_error_falls_back_to_light() {
        let mut store = ThemeStore::new(MemoryBackend {
            stored: stored("dark"),
            system_dark: true,
            read_fails: true,
            ..Default::default()
        });
        assert_eq!(store.hydrate(), ThemePreference::Light);
        assert!(store.is_hydrated());
    }

    #[test]
    fn test_system_preference_error_falls_back_to_light() {
        let mut store = ThemeStore::new(MemoryBackend {
            system_fails: true,
            ..Default::default()
        });
        assert_eq!(store.hydrate(), ThemePreference::Light);
    }

    #[test]
    fn test_hydrate_runs_once() {
        let mut store = ThemeStore::new(MemoryBackend {
            stored: stored("dark"),
            ..Default::default()
        });
        store.hydrate();
        store.toggle();
        assert_eq!(store.hydrate(), ThemePreference::Light);
        assert_eq!(store.backend().applied.borrow().len(), 2);
    }

    #[test]
    fn test_transitions_persist_and_apply_after_hydration() {
        let mut store = ThemeStore::new(MemoryBackend::default());
        store.hydrate();

        assert_eq!(store.toggle(), ThemePreference::Dark);
        assert_eq!(store.backend().stored.borrow().as_deref(), Some("dark"));

        store.set_theme(ThemePreference::Light);
        assert_eq!(store.backend().stored.borrow().as_deref(), Some("light"));
        assert_eq!(
            *store.backend().applied.borrow(),
            vec![
                ThemePreference::Light,
                ThemePreference::Dark,
                ThemePreference::Light
            ]
        );
    }

    #[test]
    fn test_changes_before_hydration_are_not_persisted() {
        let mut store = ThemeStore::new(MemoryBackend {
            stored: stored("light"),
            ..Default::default()
        });
        store.toggle();
        assert_eq!(store.theme(), ThemePreference::Dark);
        assert!(!store.is_hydrated());
        assert_eq!(store.backend().stored.borrow().as_deref(), Some("light"));

        assert_eq!(store.hydrate(), ThemePreference::Light);
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let mut store = ThemeStore::new(MemoryBackend {
            write_fails: true,
            ..Default::default()
        });
        store.hydrate();
        assert_eq!(store.toggle(), ThemePreference::Dark);
        assert_eq!(store.theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_preference_parse_and_serde() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
    }
}
