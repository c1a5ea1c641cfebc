use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hashlink_shortener::ShortenerError;
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("url not found")]
    NotFound,
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) | AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::Shortener(ShortenerError::NotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Shortener(ShortenerError::StoreUnavailable(_))
            | AppError::Shortener(ShortenerError::SaveFailed { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    /// Message exposed to clients. Backend details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::InvalidRequest(_) | AppError::InvalidUrl(_) => self.to_string(),
            AppError::NotFound | AppError::Shortener(ShortenerError::NotFound(_)) => {
                "url not found".to_string()
            }
            AppError::Shortener(ShortenerError::StoreUnavailable(_)) => {
                "storage unavailable".to_string()
            }
            AppError::Shortener(ShortenerError::SaveFailed { .. }) => {
                "failed to shorten url".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        }

        let body = Json(ErrorResponse {
            error: self.public_message(),
        });

        (status, body).into_response()
    }
}
