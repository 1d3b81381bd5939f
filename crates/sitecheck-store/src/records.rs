//! Typed list access over the storage port
//!
//! Every persisted collection is a JSON array under a fixed key, fully
//! re-read and fully rewritten on each append.

use crate::port::StoragePort;
use crate::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the submitted report list
pub const REPORTS_KEY: &str = "auditReports";

/// Storage key for the uploaded project record list
pub const PROJECTS_KEY: &str = "projects";

/// The result of a fail-soft list read.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    /// True when the stored entry was corrupt and replaced by an empty
    /// list; the caller should surface a recoverable notice
    pub recovered: bool,
}

impl<T> Loaded<T> {
    fn empty(recovered: bool) -> Self {
        Self {
            records: Vec::new(),
            recovered,
        }
    }
}

/// Read the whole list under `key`.
///
/// A missing entry is an empty list; a corrupt entry is treated as empty
/// and flagged instead of failing the view.
pub fn read_list<T: DeserializeOwned>(
    store: &dyn StoragePort,
    key: &str,
) -> Result<Loaded<T>, StoreError> {
    let Some(bytes) = store.get(key)? else {
        return Ok(Loaded::empty(false));
    };
    match serde_json::from_slice(&bytes) {
        Ok(records) => Ok(Loaded {
            records,
            recovered: false,
        }),
        Err(err) => {
            tracing::warn!(key, error = %err, "corrupt store entry, treating as empty");
            Ok(Loaded::empty(true))
        }
    }
}

/// Append one record to the list under `key` (read-whole, push,
/// write-whole). Returns the new list length.
pub fn append<T: Serialize + DeserializeOwned + Clone>(
    store: &mut dyn StoragePort,
    key: &str,
    record: &T,
) -> Result<usize, StoreError> {
    let mut list = read_list::<T>(store, key)?.records;
    list.push(record.clone());
    store.set(key, &serde_json::to_vec(&list)?)?;
    Ok(list.len())
}
