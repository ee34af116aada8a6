// In-process key-value store for tests

use super::KeyValueStore;
use anyhow::bail;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Cloned handles share the same entries, so a test can inspect what a store
/// it handed away has written.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later get/set fail, like disabled or full storage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn put_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.unavailable.get() {
            bail!("storage unavailable");
        }
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.unavailable.get() {
            bail!("storage unavailable");
        }
        self.put_raw(key, value);
        Ok(())
    }
}
