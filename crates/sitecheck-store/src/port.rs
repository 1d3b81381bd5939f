//! Storage port: the single seam between the domain logic and persistence
use crate::StoreError;
use std::collections::HashMap;

/// A key-value store of JSON blobs.
///
/// One writer, one reader, sequential in time; implementations need no
/// locking.
pub trait StoragePort {
    /// Fetch the blob stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// In-memory store used by tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("auditReports").unwrap(), None);

        store.set("auditReports", b"[]").unwrap();
        assert_eq!(store.get("auditReports").unwrap(), Some(b"[]".to_vec()));

        store.set("auditReports", b"[1]").unwrap();
        assert_eq!(store.get("auditReports").unwrap(), Some(b"[1]".to_vec()));
    }
}
