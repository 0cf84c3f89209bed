//! Named store registry owned by the composition root.
//!
//! Registration is idempotent: a second registration under the same name
//! returns the store already there and never runs the initializer.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

/// Outcome of [`StoreRegistry::register_once`]
#[derive(Debug)]
pub enum Registered<T> {
    New(T),
    Existing(T),
}

impl<T> Registered<T> {
    pub fn into_inner(self) -> T {
        match self {
            Registered::New(t) | Registered::Existing(t) => t,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Registered::New(_))
    }
}

#[derive(Default)]
pub struct StoreRegistry {
    stores: RefCell<HashMap<String, Rc<dyn Any>>>,
}

impl StoreRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a store by name. `None` if absent or registered with another type.
    pub fn get<T: Clone + 'static>(&self, name: &str) -> Option<T> {
        self.stores
            .borrow()
            .get(name)
            .and_then(|store| store.downcast_ref::<T>())
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stores.borrow().contains_key(name)
    }

    /// Register the store built by `init` unless `name` is already taken.
    ///
    /// A failing `init` registers nothing.
    pub fn register_once<T, F>(&self, name: &str, init: F) -> Result<Registered<T>>
    where
        T: Clone + 'static,
        F: FnOnce() -> Result<T>,
    {
        if let Some(existing) = self.get::<T>(name) {
            tracing::warn!("Store '{}' already registered, ignoring duplicate init", name);
            return Ok(Registered::Existing(existing));
        }

        // Not borrowed across init: the initializer may consult the registry.
        let store = init()?;
        self.stores
            .borrow_mut()
            .insert(name.to_string(), Rc::new(store.clone()));
        tracing::info!("Registered store '{}'", name);
        Ok(Registered::New(store))
    }

    /// Remove a store, returning it if it was registered with type `T`.
    pub fn remove<T: Clone + 'static>(&self, name: &str) -> Option<T> {
        let store = self.stores.borrow_mut().remove(name)?;
        store.downcast_ref::<T>().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;
    use std::cell::Cell;

    #[test]
    fn test_register_once_runs_init_once() {
        let registry = StoreRegistry::new();
        let calls = Cell::new(0);

        let first = registry
            .register_once("counter", || {
                calls.set(calls.get() + 1);
                Ok(1u32)
            })
            .unwrap();
        let second = registry
            .register_once("counter", || {
                calls.set(calls.get() + 1);
                Ok(2u32)
            })
            .unwrap();

        assert!(first.is_new());
        assert!(!second.is_new());
        assert_eq!(second.into_inner(), 1);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failed_init_registers_nothing() {
        let registry = StoreRegistry::new();
        let result: Result<Registered<u32>> =
            registry.register_once("broken", || Err(ThemeError::Unavailable("localStorage")));
        assert!(result.is_err());
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn test_get_with_wrong_type_is_none() {
        let registry = StoreRegistry::new();
        registry.register_once("n", || Ok(5u32)).unwrap();
        assert_eq!(registry.get::<u32>("n"), Some(5));
        assert_eq!(registry.get::<String>("n"), None);
    }
}
