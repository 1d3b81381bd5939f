//! Storage error model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("STORE/IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("STORE/SERIALIZE: {0}")]
    Serialize(#[from] serde_json::Error),
}
