use std::cell::RefCell;
use std::collections::HashMap;
use crate::error::Result;

pub const PARTIES_KEY: &str = "parties";
pub const VOTERS_KEY: &str = "registeredVoters";
pub const VOTES_KEY: &str = "votes";

pub const DEFAULT_PARTIES: [&str; 8] = [
    "ANC", "EFF", "DA", "MK", "UDM", "INKATHA", "Action SA", "COPE",
];

pub fn default_parties() -> Vec<String> {
    DEFAULT_PARTIES.iter().map(|p| p.to_string()).collect()
}

/// Text key-value storage holding the serialized records.
///
/// Methods take `&self` since the browser storage handle is itself shared;
/// implementations that hold data in memory use interior mutability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.get("parties").unwrap(), None);

        store.set("parties", "[]").unwrap();
        store.set("parties", "[\"DA\"]").unwrap();
        assert_eq!(store.get("parties").unwrap().as_deref(), Some("[\"DA\"]"));
        assert_eq!(store.len(), 1);

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn borrowed_store_forwards() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.set("votes", "{}").unwrap();
        assert_eq!(store.get("votes").unwrap().as_deref(), Some("{}"));
    }
}
