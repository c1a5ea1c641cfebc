use crate::error::StoreError;
use crate::shortkey::ShortKey;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// The key-value capability the shortener needs from its backend.
///
/// Implementations can be in-memory maps, Redis, or any other key-value
/// store. Consistency of concurrent writers to the same key is left to the
/// backend.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// A `ttl` of `None` or zero means the entry never expires.
    async fn save(&self, key: &ShortKey, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// Retrieves the value stored under `key`.
    /// Returns `None` if the key does not exist or has expired.
    async fn get(&self, key: &ShortKey) -> Result<Option<String>>;
}

#[async_trait]
impl<S: Store> Store for Arc<S> {
    async fn save(&self, key: &ShortKey, value: &str, ttl: Option<Duration>) -> Result<()> {
        (**self).save(key, value, ttl).await
    }

    async fn get(&self, key: &ShortKey) -> Result<Option<String>> {
        (**self).get(key).await
    }
}

/// Normalizes a TTL so that a zero duration means "no expiry".
pub fn effective_ttl(ttl: Option<Duration>) -> Option<Duration> {
    ttl.filter(|ttl| !ttl.is_zero())
}
