use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hashlink_core::ShortKey;
use tracing::{debug, info};

pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    validate_url(&request.url)?;

    let key = state.shortener().shorten(&request.url).await?;
    info!(key = %key, "created short url");

    let short_url = match state.base_url() {
        Some(base_url) => Some(key.to_url(base_url)),
        None => headers
            .get(header::HOST)
            .and_then(|host| host.to_str().ok())
            .map(|host| key.to_url(&format!("http://{host}"))),
    };

    let body = CreateUrlResponse {
        key: key.to_string(),
        short_url,
        original_url: request.url,
    };

    Ok((StatusCode::CREATED, Json(body)).into_response())
}

pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    // A malformed key can never have been issued.
    let key = ShortKey::parse(key).map_err(|e| {
        debug!(error = %e, "rejecting malformed short key");
        AppError::NotFound
    })?;

    let original_url = state.shortener().resolve(&key).await?;
    let location = HeaderValue::try_from(original_url)
        .map_err(|e| AppError::InvalidUrl(format!("stored url is not a valid header: {e}")))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// Accepts absolute `http`/`https` URLs with a host.
fn validate_url(raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(AppError::InvalidUrl("url cannot be empty".to_string()));
    }

    // The url parser silently strips these, but they would break the redirect header.
    if raw.chars().any(char::is_control) {
        return Err(AppError::InvalidUrl(
            "url must not contain control characters".to_string(),
        ));
    }

    let parsed = url::Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("{e}: {raw}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::InvalidUrl(format!(
            "url scheme must be http or https: {}",
            parsed.scheme()
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(AppError::InvalidUrl(format!("url must have a host: {raw}")));
    }

    Ok(())
}
