//! URL shortener service.
//!
//! Orchestrates key derivation and a [`Store`](hashlink_core::Store) to
//! implement shortening and resolution.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use service::ShortenerService;
pub use shortener::Shortener;
