//! Page composition root.
//!
//! Owns what used to be ambient globals: the store registry and the
//! environment marker. Each entry point mirrors a page lifecycle event:
//! - `framework_ready` - may fire more than once; registers the theme store once
//! - `document_ready` - fires once; publishes the environment
//! - `unload` - releases the OS color-scheme subscription

use std::cell::OnceCell;

use crate::environment::AppEnvironment;
use crate::error::Result;
use crate::platform::ThemePlatform;
use crate::theme::{StoreRegistry, ThemeStore, THEME_KEY};

pub struct Page {
    registry: StoreRegistry,
    environment: OnceCell<AppEnvironment>,
    storage_key: String,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self::with_storage_key(THEME_KEY)
    }

    pub fn with_storage_key(key: &str) -> Self {
        Self {
            registry: StoreRegistry::new(),
            environment: OnceCell::new(),
            storage_key: key.to_string(),
        }
    }

    /// Register and initialize the theme store unless one already exists.
    ///
    /// `platform` is only invoked for the first successful registration, so a
    /// repeated ready signal leaves the existing store and its value untouched.
    pub fn framework_ready<F>(&self, platform: F) -> Result<ThemeStore>
    where
        F: FnOnce() -> Result<ThemePlatform>,
    {
        tracing::debug!("framework ready");
        let key = self.storage_key.clone();
        let registered = self
            .registry
            .register_once(THEME_KEY, || ThemeStore::init_with_key(platform()?, &key))?;
        Ok(registered.into_inner())
    }

    /// The registered theme store, if the framework has become ready.
    pub fn theme(&self) -> Option<ThemeStore> {
        self.registry.get::<ThemeStore>(THEME_KEY)
    }

    /// Publish the environment from the body `data-env` attribute.
    ///
    /// Only the first call takes effect; later calls return the published value.
    pub fn document_ready(&self, body_env: Option<&str>) -> &AppEnvironment {
        self.environment.get_or_init(|| {
            let environment = AppEnvironment::from_attribute(body_env);
            tracing::info!("App environment ready, env = {}", environment.env);
            environment
        })
    }

    pub fn environment(&self) -> Option<&AppEnvironment> {
        self.environment.get()
    }

    /// Tear down the theme store's OS subscription.
    pub fn unload(self) {
        if let Some(store) = self.registry.remove::<ThemeStore>(THEME_KEY) {
            store.teardown();
        }
    }
}
