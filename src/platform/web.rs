//! Browser implementations backed by `web-sys`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MediaQueryList, MediaQueryListEvent, Storage};

use super::{ColorSchemeListener, ColorSchemeSignal, DocumentRoot, PreferenceStorage, Subscription};
use crate::error::{Result, ThemeError};

/// Media query mirrored by [`MediaQuerySignal`].
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(ThemeError::Unavailable("window"))
}

fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self> {
        let storage = window()?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(ThemeError::Unavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::read(key, js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::write(key, js_message(&e)))
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")` and its `change` events.
pub struct MediaQuerySignal {
    query: MediaQueryList,
}

impl MediaQuerySignal {
    pub fn dark_scheme() -> Result<Self> {
        let query = window()?
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .ok_or(ThemeError::Unavailable("matchMedia"))?;
        Ok(Self { query })
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        self.query.matches()
    }

    fn subscribe(&self, mut listener: ColorSchemeListener) -> Subscription {
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            listener(event.matches());
        });

        if let Err(e) = self
            .query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to subscribe to color-scheme changes: {}", js_message(&e));
            return Subscription::inactive();
        }

        // The closure must outlive the registration, so the disposer owns it.
        let query = self.query.clone();
        Subscription::new(move || {
            if let Err(e) = query
                .remove_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            {
                tracing::warn!("Failed to remove color-scheme listener: {}", js_message(&e));
            }
            drop(callback);
        })
    }
}

/// `document.documentElement`.
pub struct RootElement {
    element: Element,
}

impl RootElement {
    pub fn current() -> Result<Self> {
        let element = window()?
            .document()
            .and_then(|d| d.document_element())
            .ok_or(ThemeError::Unavailable("document element"))?;
        Ok(Self { element })
    }
}

impl DocumentRoot for RootElement {
    fn toggle_class(&self, class: &str, on: bool) {
        if let Err(e) = self.element.class_list().toggle_with_force(class, on) {
            tracing::warn!("Failed to toggle root class '{}': {}", class, js_message(&e));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}

/// Raw `data-env` attribute on `<body>`, if any.
pub fn body_env() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute("data-env"))
}
