use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Longest key a base62-encoded `u64` can produce.
pub const MAX_LENGTH: usize = 11;

/// A short key identifying a shortened URL.
///
/// Keys are 1-11 characters drawn from `[a-zA-Z0-9]`. They carry no identity
/// beyond their string value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortKey(String);

impl ShortKey {
    /// Parses a key from untrusted input, such as a request path segment.
    pub fn parse(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        Self::validate(&key)?;
        Ok(Self(key))
    }

    /// Creates a `ShortKey` without validation.
    ///
    /// Use this only for keys produced by trusted internal sources
    /// (e.g. a key generator that always emits base62 output).
    pub fn new_unchecked(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(key: &str) -> Result<()> {
        if key.is_empty() || key.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortKey(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                key.len()
            )));
        }

        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortKey(format!(
                "must contain only ASCII letters and digits: '{}'",
                key
            )));
        }

        Ok(())
    }
}

impl Display for ShortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_keys() {
        assert!(ShortKey::parse("a").is_ok());
        assert!(ShortKey::parse("HUawi").is_ok());
        assert!(ShortKey::parse("pIrkgbKrQ8v").is_ok());
    }

    #[test]
    fn empty_key() {
        assert!(matches!(
            ShortKey::parse(""),
            Err(CoreError::InvalidShortKey(_))
        ));
    }

    #[test]
    fn too_long() {
        assert!(ShortKey::parse("a".repeat(MAX_LENGTH + 1)).is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortKey::parse("abc-def").is_err());
        assert!(ShortKey::parse("abc_def").is_err());
        assert!(ShortKey::parse("abc/def").is_err());
        assert!(ShortKey::parse("héllo").is_err());
    }

    #[test]
    fn display_matches_input() {
        let key = ShortKey::parse("kPpCoVygmnp").unwrap();
        assert_eq!(key.to_string(), "kPpCoVygmnp");
        assert_eq!(key.as_str(), "kPpCoVygmnp");
    }

    #[test]
    fn to_url_joins_with_single_slash() {
        let key = ShortKey::new_unchecked("abc123");
        assert_eq!(key.to_url("https://hash.link"), "https://hash.link/abc123");
        assert_eq!(key.to_url("https://hash.link/"), "https://hash.link/abc123");
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = ShortKey::new_unchecked("HUawi");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"HUawi\"");
    }
}
