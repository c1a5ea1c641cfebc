use clap::{Parser, ValueEnum};
use hashlink_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "HASHLINK_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "HASHLINK_PUBLIC_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "HASHLINK_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "HASHLINK_REDIS_URL";
pub const REDIS_KEY_PREFIX_ENV: &str = "HASHLINK_REDIS_KEY_PREFIX";
pub const REDIS_CONNECT_TIMEOUT_ENV: &str = "HASHLINK_REDIS_CONNECT_TIMEOUT_MS";
pub const REDIS_RESPONSE_TIMEOUT_ENV: &str = "HASHLINK_REDIS_RESPONSE_TIMEOUT_MS";
pub const DEFAULT_TTL_ENV: &str = "HASHLINK_DEFAULT_TTL_SECS";
pub const LOG_FORMAT_ENV: &str = "HASHLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashlink-gateway", about = "HTTP front end of the hashlink URL shortener")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base of returned short URLs; the request Host header is used when unset.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = REDIS_KEY_PREFIX_ENV, default_value = "")]
    pub redis_key_prefix: String,

    #[arg(long, env = REDIS_CONNECT_TIMEOUT_ENV, default_value_t = 10_000)]
    pub redis_connect_timeout_ms: u64,

    #[arg(long, env = REDIS_RESPONSE_TIMEOUT_ENV, default_value_t = 5_000)]
    pub redis_response_timeout_ms: u64,

    /// TTL of new short URLs in seconds; 0 keeps them forever.
    #[arg(long, env = DEFAULT_TTL_ENV, default_value_t = 0)]
    pub default_ttl_secs: u64,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl CLI {
    pub fn default_ttl(&self) -> Option<Duration> {
        (self.default_ttl_secs > 0).then(|| Duration::from_secs(self.default_ttl_secs))
    }

    pub fn redis_connect_timeout(&self) -> Duration {
        Duration::from_millis(self.redis_connect_timeout_ms)
    }

    pub fn redis_response_timeout(&self) -> Duration {
        Duration::from_millis(self.redis_response_timeout_ms)
    }
}
