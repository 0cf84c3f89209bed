//! In-process platform implementations.
//!
//! Used by the native binary and by tests. All handles are cheap `Rc` clones
//! sharing one underlying state, so a test can keep a handle while the store
//! owns another (and a second "page load" can reopen the same storage).

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{ColorSchemeListener, ColorSchemeSignal, DocumentRoot, PreferenceStorage, Subscription};
use crate::error::{Result, ThemeError};

// =============================================================================
// MemoryStorage
// =============================================================================

#[derive(Default)]
struct StorageInner {
    values: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

/// Key-value storage held in memory for the lifetime of the handle.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Rc<StorageInner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .inner
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Make subsequent writes fail, as a browser does when quota is exceeded.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.set(fail);
    }

    /// Make subsequent reads fail, as a browser does when storage is blocked.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.set(fail);
    }

    /// Raw stored value, bypassing failure injection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.inner.values.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.inner.fail_reads.get() {
            return Err(ThemeError::read(key, "SecurityError: storage access denied"));
        }
        Ok(self.inner.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.inner.fail_writes.get() {
            return Err(ThemeError::write(key, "QuotaExceededError"));
        }
        self.inner
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// ManualColorScheme
// =============================================================================

#[derive(Default)]
struct SchemeInner {
    dark: Cell<bool>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, ColorSchemeListener)>>,
    emitting: Cell<bool>,
    removed_while_emitting: RefCell<Vec<u64>>,
}

impl SchemeInner {
    fn remove(&self, id: u64) {
        if self.emitting.get() {
            self.removed_while_emitting.borrow_mut().push(id);
        } else {
            self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
        }
    }
}

/// Color-scheme signal driven by hand: `emit` plays the part of the OS.
#[derive(Clone, Default)]
pub struct ManualColorScheme {
    inner: Rc<SchemeInner>,
}

impl ManualColorScheme {
    pub fn new(dark: bool) -> Self {
        let scheme = Self::default();
        scheme.inner.dark.set(dark);
        scheme
    }

    /// Change the OS preference and notify every registered listener.
    pub fn emit(&self, dark: bool) {
        self.inner.dark.set(dark);

        // Listeners run outside the borrow so they may subscribe or unsubscribe.
        let mut listeners = self.inner.listeners.take();
        self.inner.emitting.set(true);
        for (_, listener) in listeners.iter_mut() {
            listener(dark);
        }
        self.inner.emitting.set(false);

        let removed = self.inner.removed_while_emitting.take();
        let mut current = self.inner.listeners.borrow_mut();
        listeners.append(&mut current);
        listeners.retain(|(id, _)| !removed.contains(id));
        *current = listeners;
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl ColorSchemeSignal for ManualColorScheme {
    fn prefers_dark(&self) -> bool {
        self.inner.dark.get()
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));

        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.remove(id);
            }
        })
    }
}

// =============================================================================
// ClassListDocument
// =============================================================================

/// Root element stand-in that records its class list.
#[derive(Clone, Default)]
pub struct ClassListDocument {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl ClassListDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl DocumentRoot for ClassListDocument {
    fn toggle_class(&self, class: &str, on: bool) {
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}
