//! Theme context backed by the page's theme store.
//!
//! The store itself does the persistence and DOM work; the context mirrors
//! its value into a signal so components re-render on change.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::error::Result;
use crate::page::Page;
use crate::platform::ThemePlatform;
use crate::theme::{Theme, ThemeStore};

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<Theme>,
    /// Last persistence failure, shown until dismissed
    pub error: Signal<Option<String>>,
    store: Signal<Option<ThemeStore>>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        (self.current)()
    }

    /// Set and persist theme
    pub fn set(&self, theme: Theme) {
        let mut current = self.current;
        let mut error = self.error;
        current.set(theme.clone());

        let store: Option<ThemeStore> = (*self.store.peek()).clone();
        if let Some(store) = store {
            match store.set(theme) {
                Ok(()) => error.set(None),
                Err(e) => error.set(Some(format!("Could not save theme: {}", e))),
            }
        }
    }

    pub fn dismiss_error(&self) {
        let mut error = self.error;
        error.set(None);
    }
}

#[cfg(target_arch = "wasm32")]
fn page_platform() -> Result<ThemePlatform> {
    ThemePlatform::web()
}

// Without a browser the preference lives for the session only.
#[cfg(not(target_arch = "wasm32"))]
fn page_platform() -> Result<ThemePlatform> {
    use crate::platform::{ClassListDocument, ManualColorScheme, MemoryStorage};
    Ok(ThemePlatform::new(
        MemoryStorage::new(),
        ManualColorScheme::new(false),
        ClassListDocument::new(),
    ))
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider(page: Rc<Page>) -> ThemeContext {
    let mut current = use_signal(|| Theme::System);
    let error = use_signal(|| None::<String>);
    let mut store = use_signal(|| None::<ThemeStore>);

    let ctx = use_context_provider(|| ThemeContext {
        current,
        error,
        store,
    });

    // Client-side: register the store on the page and pick up its value
    use_effect(move || match page.framework_ready(page_platform) {
        Ok(registered) => {
            current.set(registered.value());
            store.set(Some(registered));
        }
        Err(e) => tracing::warn!("Theme store unavailable: {}", e),
    });

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
