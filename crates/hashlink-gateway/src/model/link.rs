use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUrlResponse {
    pub key: String,
    /// Absent when neither a public base URL nor a `Host` header is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    pub original_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
