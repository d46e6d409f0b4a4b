use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory store for tests. Same contract as `FileStore`, no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly, bypassing the notebook. Lets tests stage
    /// legacy or corrupt snapshots before `Notebook::load` runs.
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::TitlePolicy;
    use crate::notebook::Notebook;

    /// A freshly loaded notebook over an empty in-memory store; holds the
    /// one seeded note.
    pub fn notebook() -> Notebook<InMemoryStore> {
        Notebook::load(InMemoryStore::new(), TitlePolicy::Sequential).unwrap()
    }

    /// A notebook holding `count` notes (the seed plus `count - 1` created).
    pub fn notebook_with_notes(count: usize) -> Notebook<InMemoryStore> {
        let mut nb = notebook();
        for _ in 1..count {
            nb.create().unwrap();
        }
        nb
    }
}
