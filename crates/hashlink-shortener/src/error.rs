use hashlink_core::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// The key was never shortened, or its record expired.
    #[error("short key not found: {0}")]
    NotFound(String),
    /// The store failed while resolving a key.
    #[error("storage unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
    /// The store failed while recording a new key; the key would not resolve.
    #[error("failed to save short key {key}: {source}")]
    SaveFailed {
        key: String,
        #[source]
        source: StoreError,
    },
}
