//! [`Store`](hashlink_core::Store) implementations.

pub mod memory;
pub mod redis;

pub use hashlink_core::{Store, StoreError};
pub use self::memory::InMemoryStore;
pub use self::redis::{RedisStore, RedisStoreConfig};
