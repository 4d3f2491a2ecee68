use super::DataStore;
use crate::error::Result;
use crate::model::Scope;
use std::collections::HashMap;

/// In-memory store for tests. Behaves like the production backend minus
/// durability: a plain map of `(scope, key)` to entry text.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: HashMap<(Scope, String), String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry directly, bypassing the book. Useful for corruption
    /// scenarios that the write path can never produce.
    pub fn seed(&mut self, key: &str, value: &str, scope: Scope) {
        self.entries.insert((scope, key.to_string()), value.to_string());
    }
}

impl DataStore for InMemoryStore {
    fn read_entry(&self, key: &str, scope: Scope) -> Result<Option<String>> {
        Ok(self.entries.get(&(scope, key.to_string())).cloned())
    }

    fn write_entry(&mut self, key: &str, value: &str, scope: Scope) -> Result<()> {
        self.seed(key, value, scope);
        Ok(())
    }
}
