//! Short key derivation.
//!
//! Keys are derived from the URL itself, so shortening the same URL twice
//! always yields the same key. Distinct URLs may collide; nothing here
//! detects or resolves that.

pub mod base62;

use hashlink_core::ShortKey;
use xxhash_rust::xxh64::xxh64;

/// Trait for deriving short keys from URLs.
///
/// Implementations are pure functions of their input and don't interact
/// with storage.
pub trait KeyGenerator: Send + Sync + 'static {
    /// Derives the short key for `url`. Never fails.
    fn derive(&self, url: &str) -> ShortKey;
}

/// Derives keys by hashing the URL with XXH64 and encoding the hash in base62.
///
/// The seed is fixed, so keys are stable across processes and restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashKeyGenerator;

impl HashKeyGenerator {
    const SEED: u64 = 0;

    pub fn new() -> Self {
        Self
    }

    /// The 64-bit hash a key is encoded from.
    pub fn hash(url: &str) -> u64 {
        xxh64(url.as_bytes(), Self::SEED)
    }
}

impl KeyGenerator for HashKeyGenerator {
    fn derive(&self, url: &str) -> ShortKey {
        ShortKey::new_unchecked(base62::encode(Self::hash(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashlink_core::shortkey::MAX_LENGTH;

    #[test]
    fn golden_keys() {
        let generator = HashKeyGenerator::new();

        assert_eq!(generator.derive("https://example.com").as_str(), "kPpCoVygmnp");
        assert_eq!(generator.derive("https://example.org").as_str(), "3O83Ew0ysJt");
        assert_eq!(
            generator.derive("https://github.com/user/repo").as_str(),
            "1vB40mDFEBc"
        );
    }

    #[test]
    fn empty_input_still_yields_a_key() {
        let key = HashKeyGenerator::new().derive("");
        assert_eq!(key.as_str(), "TSxL3pgnPHu");
    }

    #[test]
    fn hash_matches_reference_vectors() {
        assert_eq!(HashKeyGenerator::hash(""), 0xEF46_DB37_51D8_E999);
        assert_eq!(HashKeyGenerator::hash("abc"), 0x44BC_2CF5_AD77_0999);
    }

    #[test]
    fn derive_is_deterministic() {
        let first = HashKeyGenerator::new();
        let second = HashKeyGenerator::new();
        let url = "https://example.com/very/long/path/with/many/segments?param1=value1&param2=value2";

        assert_eq!(first.derive(url), first.derive(url));
        assert_eq!(first.derive(url), second.derive(url));
    }

    #[test]
    fn keys_use_only_the_base62_alphabet() {
        let generator = HashKeyGenerator::new();
        let urls = [
            "",
            "https://example.com",
            "http://localhost:8080/a?b=c#d",
            "https://例え.jp/パス",
            "not a url at all",
        ];

        for url in urls {
            let key = generator.derive(url);
            assert!(!key.as_str().is_empty(), "empty key for {url:?}");
            assert!(key.as_str().len() <= MAX_LENGTH, "key too long for {url:?}");
            assert!(
                key.as_str().bytes().all(|c| base62::ALPHABET.contains(&c)),
                "foreign character in key for {url:?}"
            );
            assert!(ShortKey::parse(key.as_str()).is_ok());
        }
    }

    #[test]
    fn distinct_urls_yield_distinct_keys() {
        let generator = HashKeyGenerator::new();
        let keys: std::collections::HashSet<_> = (0..10_000)
            .map(|i| generator.derive(&format!("https://example.com/item/{i}")))
            .collect();

        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn key_decodes_back_to_hash() {
        let url = "https://example.com";
        let key = HashKeyGenerator::new().derive(url);

        assert_eq!(base62::decode(key.as_str()), Some(HashKeyGenerator::hash(url)));
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HashKeyGenerator>();
    }
}
