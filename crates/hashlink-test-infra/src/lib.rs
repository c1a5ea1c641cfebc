//! Disposable backends for integration tests.
//!
//! Everything here starts Docker containers through `testcontainers`, so the
//! tests using it need a reachable Docker daemon.

pub mod error;
pub mod redis;

pub use error::{Result, TestInfraError};
