//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "persistent")]
    #[error("Fjall error: {0}")]
    Fjall(#[from] fjall::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid collection under key '{key}': {source}")]
    InvalidCollection {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Store not initialized at {0}")]
    NotInitialized(String),
}
