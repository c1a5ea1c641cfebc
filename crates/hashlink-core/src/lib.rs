//! Core types and traits for the hashlink URL shortener.
//!
//! This crate provides the short key type and the narrow storage capability
//! shared by the key generator, the stores and the shortener service.

pub mod error;
pub mod shortkey;
pub mod store;

pub use error::{CoreError, StoreError};
pub use shortkey::ShortKey;
pub use store::Store;
