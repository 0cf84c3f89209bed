//! Theme preference store.
//!
//! Keeps durable storage, in-memory state and the document root class in
//! agreement. The store is single-threaded: clones share one `Rc` and all
//! mutation happens on the UI thread, serialized by the event loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;

use super::{Theme, DARK_CLASS, THEME_KEY};
use crate::error::Result;
use crate::platform::{ColorSchemeSignal, DocumentRoot, PreferenceStorage, Subscription, ThemePlatform};

#[derive(Debug)]
struct ThemeState {
    value: Theme,
    system_dark: bool,
}

struct Inner {
    key: String,
    state: RefCell<ThemeState>,
    storage: Box<dyn PreferenceStorage>,
    document: Box<dyn DocumentRoot>,
    // Declared before `scheme` so it is released first.
    os_subscription: RefCell<Option<Subscription>>,
    scheme: Box<dyn ColorSchemeSignal>,
}

/// Serializable view of the store for page code and the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    pub value: Theme,
    pub system_dark: bool,
    pub use_dark: bool,
}

/// Handle to the theme store. Cloning shares the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<Inner>,
}

impl ThemeStore {
    /// Load the persisted preference, render it, and start following OS changes.
    pub fn init(platform: ThemePlatform) -> Result<Self> {
        Self::init_with_key(platform, THEME_KEY)
    }

    /// Same as [`ThemeStore::init`] with a non-default storage key.
    pub fn init_with_key(platform: ThemePlatform, key: &str) -> Result<Self> {
        let ThemePlatform {
            storage,
            scheme,
            document,
        } = platform;

        let value = storage
            .get(key)?
            .map(Theme::from)
            .unwrap_or_default();
        let system_dark = scheme.prefers_dark();

        let store = Self {
            inner: Rc::new(Inner {
                key: key.to_string(),
                state: RefCell::new(ThemeState { value, system_dark }),
                storage,
                document,
                os_subscription: RefCell::new(None),
                scheme,
            }),
        };

        store.apply();

        let weak: Weak<Inner> = Rc::downgrade(&store.inner);
        let subscription = store.inner.scheme.subscribe(Box::new(move |dark| {
            if let Some(inner) = weak.upgrade() {
                ThemeStore { inner }.on_system_change(dark);
            }
        }));
        *store.inner.os_subscription.borrow_mut() = Some(subscription);

        tracing::info!(
            value = %store.value(),
            system_dark,
            "Theme store initialized"
        );
        Ok(store)
    }

    /// Current preference
    pub fn value(&self) -> Theme {
        self.inner.state.borrow().value.clone()
    }

    /// OS dark-mode preference at last observation
    pub fn system_dark(&self) -> bool {
        self.inner.state.borrow().system_dark
    }

    /// Whether dark rendering is currently in effect
    pub fn use_dark(&self) -> bool {
        let state = self.inner.state.borrow();
        state.value.use_dark(state.system_dark)
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        let state = self.inner.state.borrow();
        ThemeSnapshot {
            value: state.value.clone(),
            system_dark: state.system_dark,
            use_dark: state.value.use_dark(state.system_dark),
        }
    }

    /// Change and persist the preference, then re-render.
    ///
    /// The in-memory value is updated before the write. If the write fails,
    /// the error is returned and the document is left as it was.
    pub fn set(&self, next: impl Into<Theme>) -> Result<()> {
        // Re-parse so `Custom("dark")` and `Dark` are the same preference,
        // exactly as they will be after a reload from storage.
        let next = Theme::parse(next.into().as_str());
        self.inner.state.borrow_mut().value = next.clone();

        if let Err(e) = self.inner.storage.set(&self.inner.key, next.as_str()) {
            tracing::warn!("Failed to persist theme '{}': {}", next, e);
            return Err(e);
        }

        self.apply();
        tracing::debug!(next = %next, "theme set");
        Ok(())
    }

    /// Toggle the dark class on the document root to match current state.
    pub fn apply(&self) {
        let (use_dark, value, system_dark) = {
            let state = self.inner.state.borrow();
            (
                state.value.use_dark(state.system_dark),
                state.value.clone(),
                state.system_dark,
            )
        };
        self.inner.document.toggle_class(DARK_CLASS, use_dark);
        tracing::debug!(value = %value, system_dark, use_dark, "theme apply");
    }

    fn on_system_change(&self, dark: bool) {
        let follows_system = {
            let mut state = self.inner.state.borrow_mut();
            state.system_dark = dark;
            state.value.is_system()
        };
        if follows_system {
            self.apply();
        }
    }

    /// Whether the store is still listening for OS color-scheme changes
    pub fn is_subscribed(&self) -> bool {
        self.inner
            .os_subscription
            .borrow()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Stop following OS changes. Current state and document are left as is.
    pub fn teardown(&self) {
        let subscription = self.inner.os_subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
            tracing::debug!("theme store unsubscribed from color-scheme changes");
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("ThemeStore")
            .field("key", &self.inner.key)
            .field("value", &state.value)
            .field("system_dark", &state.system_dark)
            .finish()
    }
}
