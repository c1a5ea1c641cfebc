use crate::error::ShortenerError;
use crate::shortener::Shortener;
use async_trait::async_trait;
use hashlink_core::{ShortKey, Store};
use hashlink_keygen::{HashKeyGenerator, KeyGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`Store`] and a [`KeyGenerator`]. Keys are derived
/// from the URL, so shortening is an idempotent overwrite: the same URL always
/// maps to the same key and rewrites the same record.
///
/// Note: two URLs that derive the same key overwrite each other. No collision
/// detection is performed.
#[derive(Debug)]
pub struct ShortenerService<S, G = HashKeyGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    default_ttl: Option<Duration>,
}

impl<S, G> Clone for ShortenerService<S, G> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            generator: Arc::clone(&self.generator),
            default_ttl: self.default_ttl,
        }
    }
}

impl<S: Store> ShortenerService<S, HashKeyGenerator> {
    /// Creates a new `ShortenerService` deriving keys with [`HashKeyGenerator`].
    pub fn new(store: S) -> Self {
        Self::with_generator(store, HashKeyGenerator::new())
    }
}

impl<S: Store, G: KeyGenerator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with a custom key generator.
    pub fn with_generator(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            default_ttl: None,
        }
    }

    /// Sets the TTL applied by [`Shortener::shorten`]. `None` or zero means no expiry.
    pub fn with_default_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }
}

#[async_trait]
impl<S: Store, G: KeyGenerator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, url: &str) -> Result<ShortKey, ShortenerError> {
        self.shorten_with_ttl(url, self.default_ttl).await
    }

    async fn shorten_with_ttl(
        &self,
        url: &str,
        ttl: Option<Duration>,
    ) -> Result<ShortKey, ShortenerError> {
        let key = self.generator.derive(url);

        if let Err(e) = self.store.save(&key, url, ttl).await {
            warn!(key = %key, error = %e, "failed to save short key");
            return Err(ShortenerError::SaveFailed {
                key: key.to_string(),
                source: e,
            });
        }

        debug!(key = %key, ttl = ?ttl, "shortened url");
        Ok(key)
    }

    async fn resolve(&self, key: &ShortKey) -> Result<String, ShortenerError> {
        match self.store.get(key).await {
            Ok(Some(url)) => {
                debug!(key = %key, "resolved short key");
                Ok(url)
            }
            Ok(None) => {
                trace!(key = %key, "short key not found");
                Err(ShortenerError::NotFound(key.to_string()))
            }
            Err(e) => {
                warn!(key = %key, error = %e, "failed to resolve short key");
                Err(ShortenerError::StoreUnavailable(e))
            }
        }
    }
}
