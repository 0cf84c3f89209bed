//! Platform seams for the theme store.
//!
//! The store never touches the browser directly. It is handed three
//! collaborators:
//! - [`PreferenceStorage`] - durable string storage (localStorage on the web)
//! - [`ColorSchemeSignal`] - the OS `prefers-color-scheme: dark` media signal
//! - [`DocumentRoot`] - the root element whose class list stylesheets read
//!
//! `web` provides the wasm32 implementations, `memory` the in-process ones
//! used natively and in tests.

use crate::error::Result;

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::{ClassListDocument, ManualColorScheme, MemoryStorage};

/// Durable key-value string storage scoped to the page origin.
pub trait PreferenceStorage {
    /// Read a raw value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Listener invoked with the new `matches` value on every OS change.
pub type ColorSchemeListener = Box<dyn FnMut(bool)>;

/// OS-level dark-mode preference.
pub trait ColorSchemeSignal {
    /// Current `matches` state of the dark-mode media query.
    fn prefers_dark(&self) -> bool;

    /// Register a change listener. The listener stays registered until the
    /// returned [`Subscription`] is dropped or unsubscribed.
    fn subscribe(&self, listener: ColorSchemeListener) -> Subscription;
}

/// Presentation state of the document root element.
pub trait DocumentRoot {
    /// Add (`on == true`) or remove a class on the root element.
    fn toggle_class(&self, class: &str, on: bool);

    fn has_class(&self, class: &str) -> bool;
}

/// The collaborators a theme store is built from.
pub struct ThemePlatform {
    pub storage: Box<dyn PreferenceStorage>,
    pub scheme: Box<dyn ColorSchemeSignal>,
    pub document: Box<dyn DocumentRoot>,
}

impl ThemePlatform {
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        scheme: impl ColorSchemeSignal + 'static,
        document: impl DocumentRoot + 'static,
    ) -> Self {
        Self {
            storage: Box::new(storage),
            scheme: Box::new(scheme),
            document: Box::new(document),
        }
    }

    /// localStorage, `matchMedia` and `document.documentElement` of the current page.
    #[cfg(target_arch = "wasm32")]
    pub fn web() -> Result<Self> {
        Ok(Self::new(
            web::LocalStorage::open()?,
            web::MediaQuerySignal::dark_scheme()?,
            web::RootElement::current()?,
        ))
    }
}

/// Disposer for a listener registration.
///
/// Dropping the handle unsubscribes; `unsubscribe` does the same explicitly.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    /// Handle for a registration that never took effect (e.g. the platform
    /// refused the listener). Reports itself as inactive.
    pub fn inactive() -> Self {
        Self { dispose: None }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.dispose.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.dispose_now();
    }

    fn dispose_now(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscription_disposes_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || c.set(c.get() + 1));
        sub.unsubscribe();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_inactive_subscription_reports_inactive() {
        assert!(!Subscription::inactive().is_active());
        assert!(Subscription::new(|| {}).is_active());
    }

    #[test]
    fn test_subscription_disposes_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let c = count.clone();
            let _sub = Subscription::new(move || c.set(c.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }
}
