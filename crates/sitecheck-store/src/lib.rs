//! Sitecheck Store: the persistence seam
//!
//! A key-value port over JSON blobs with an in-memory fake for tests
//! and a file-backed implementation for production, plus typed
//! read-whole/append/write-whole list access with fail-soft reads.

pub mod error;
pub mod file;
pub mod port;
pub mod records;

pub use error::StoreError;
pub use file::FileStore;
pub use port::{MemoryStore, StoragePort};
pub use records::{append, read_list, Loaded, PROJECTS_KEY, REPORTS_KEY};
