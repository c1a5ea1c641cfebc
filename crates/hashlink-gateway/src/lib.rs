//! HTTP gateway for the hashlink shortener.
//!
//! Maps `POST /` to shortening and `GET /{key}` to a permanent redirect.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
