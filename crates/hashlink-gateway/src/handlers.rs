mod health;
mod link;

pub use health::health_handler;
pub use link::{create_url_handler, redirect_handler};
