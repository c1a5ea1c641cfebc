use async_trait::async_trait;
use dashmap::DashMap;
use hashlink_core::store::{effective_ttl, Result, Store};
use hashlink_core::{ShortKey, StoreError};
use jiff::{SignedDuration, Timestamp};
use std::time::Duration;
use tracing::trace;

/// In-memory storage entry for a key mapping.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expire_at: Option<Timestamp>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expire_at
            .is_some_and(|expire_at| Timestamp::now() >= expire_at)
    }
}

/// In-memory implementation of the [`Store`] trait using DashMap.
///
/// DashMap uses sharded locks, so concurrent reads and writes to different
/// keys don't block each other. Expired entries are removed lazily when read.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, Entry>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of entries held, including expired ones not yet collected.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

fn expire_at(ttl: Option<Duration>) -> Result<Option<Timestamp>> {
    let Some(ttl) = effective_ttl(ttl) else {
        return Ok(None);
    };

    let ttl = SignedDuration::try_from(ttl)
        .map_err(|e| StoreError::InvalidData(format!("ttl out of range: {e}")))?;
    Timestamp::now()
        .checked_add(ttl)
        .map(Some)
        .map_err(|e| StoreError::InvalidData(format!("ttl out of range: {e}")))
}

#[async_trait]
impl Store for InMemoryStore {
    async fn save(&self, key: &ShortKey, value: &str, ttl: Option<Duration>) -> Result<()> {
        let entry = Entry {
            value: value.to_owned(),
            expire_at: expire_at(ttl)?,
        };

        // Last write wins; an existing value for this key is replaced.
        self.storage.insert(key.as_str().to_owned(), entry);
        Ok(())
    }

    async fn get(&self, key: &ShortKey) -> Result<Option<String>> {
        let key = key.as_str();

        let Some(entry) = self.storage.get(key) else {
            return Ok(None);
        };

        if entry.is_expired() {
            drop(entry);
            trace!(key, "dropping expired entry");
            self.storage.remove_if(key, |_, entry| entry.is_expired());
            return Ok(None);
        }

        Ok(Some(entry.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn key(s: &str) -> ShortKey {
        ShortKey::new_unchecked(s)
    }

    #[tokio::test]
    async fn save_and_get() {
        let store = InMemoryStore::new();

        store
            .save(&key("abc123"), "https://example.com", None)
            .await
            .unwrap();

        let result = store.get(&key("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryStore::new();

        let result = store.get(&key("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn save_overwrites_existing_value() {
        let store = InMemoryStore::new();

        store
            .save(&key("abc123"), "https://old.com", None)
            .await
            .unwrap();
        store
            .save(&key("abc123"), "https://new.com", None)
            .await
            .unwrap();

        let result = store.get(&key("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://new.com"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn expired_entry_returns_none() {
        let store = InMemoryStore::new();

        store
            .save(
                &key("abc123"),
                "https://example.com",
                Some(Duration::from_millis(1)),
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let result = store.get(&key("abc123")).await.unwrap();
        assert!(result.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn not_expired_entry() {
        let store = InMemoryStore::new();

        store
            .save(
                &key("abc123"),
                "https://example.com",
                Some(Duration::from_secs(3600)),
            )
            .await
            .unwrap();

        let result = store.get(&key("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn zero_ttl_never_expires() {
        let store = InMemoryStore::new();

        store
            .save(&key("abc123"), "https://example.com", Some(Duration::ZERO))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        let result = store.get(&key("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn overwrite_clears_previous_expiry() {
        let store = InMemoryStore::new();

        store
            .save(
                &key("abc123"),
                "https://example.com",
                Some(Duration::from_millis(1)),
            )
            .await
            .unwrap();
        store
            .save(&key("abc123"), "https://example.com", None)
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let result = store.get(&key("abc123")).await.unwrap();
        assert_eq!(result.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn absurd_ttl_is_rejected() {
        let store = InMemoryStore::new();

        let err = store
            .save(&key("abc123"), "https://example.com", Some(Duration::MAX))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::InvalidData(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn concurrent_access() {
        let store = Arc::new(InMemoryStore::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let k = ShortKey::new_unchecked(format!("key{:03}", i));
                store
                    .save(&k, &format!("https://example{}.com", i), None)
                    .await
                    .unwrap();
            }));
        }

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let k = ShortKey::new_unchecked(format!("key{:03}", i));
                let _ = store.get(&k).await;
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        for i in 0..10u64 {
            let k = ShortKey::new_unchecked(format!("key{:03}", i));
            let result = store.get(&k).await.unwrap();
            assert_eq!(result, Some(format!("https://example{}.com", i)));
        }
    }
}
