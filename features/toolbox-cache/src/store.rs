use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

/// Raw key/value storage the cache writes to
pub trait KeyValueStore: Send + Sync {
    fn data(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `data` under `key`, replacing any previous value
    fn set_data(&self, key: &str, data: Vec<u8>);

    fn remove(&self, key: &str);
}

/// Store keeping everything in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn data(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_data(&self, key: &str, data: Vec<u8>) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), data);
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
