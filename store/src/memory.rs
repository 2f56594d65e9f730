//! In-memory state backend for tests and single-process tools.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::state::{StateRead, StateWrite};

/// HashMap-backed state. Not durable; the LMDB backend is the production one.
#[derive(Debug, Default, Clone)]
pub struct MemoryState {
    entries: HashMap<Vec<u8>, Vec<u8>>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateRead for MemoryState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }
}

impl StateWrite for MemoryState {
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
