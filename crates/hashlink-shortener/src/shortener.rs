use crate::error::ShortenerError;
use async_trait::async_trait;
use hashlink_core::ShortKey;
use std::time::Duration;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens `url` with the service's default TTL and returns its key.
    async fn shorten(&self, url: &str) -> Result<ShortKey>;

    /// Shortens `url` with an explicit TTL. `None` or zero means no expiry.
    async fn shorten_with_ttl(&self, url: &str, ttl: Option<Duration>) -> Result<ShortKey>;

    /// Resolves a short key to the URL most recently shortened under it.
    async fn resolve(&self, key: &ShortKey) -> Result<String>;
}
