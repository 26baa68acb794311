//! Configuration Module
//!
//! Cache engine, HTTP front end and top-level server configuration.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// == Cache Config ==
/// Cache engine parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Interval between background sweeps; zero falls back to the default
    #[serde(rename = "cleanup_interval_ms", with = "duration_ms")]
    pub cleanup_interval: Duration,
    /// Advisory maximum number of entries. Accepted but not enforced.
    pub max_size: u64,
}

impl CacheConfig {
    /// Sweep interval used when none (or zero) is configured.
    pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(5 * 60);

    /// Sets the interval between background sweeps.
    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }

    /// Sets the advisory maximum size.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Returns the sweep interval the engine actually runs with.
    pub fn effective_cleanup_interval(&self) -> Duration {
        if self.cleanup_interval.is_zero() {
            Self::DEFAULT_CLEANUP_INTERVAL
        } else {
            self.cleanup_interval
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Self::DEFAULT_CLEANUP_INTERVAL,
            max_size: 0,
        }
    }
}

// == HTTP Config ==
/// HTTP front end parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whether to start an HTTP listener at all
    pub enabled: bool,
    /// Listen port
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 8080,
        }
    }
}

// == Config ==
/// Server configuration: the cache engine plus its optional HTTP front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cache: CacheConfig,
    pub http: HttpConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CLEANUP_INTERVAL_SECS` - Sweep interval in seconds (default: 300)
    /// - `CACHE_MAX_SIZE` - Advisory maximum entry count (default: 0)
    /// - `HTTP_ENABLED` - Start the HTTP listener (default: true)
    /// - `HTTP_PORT` - HTTP listen port (default: 8080)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let cleanup_interval = lookup("CACHE_CLEANUP_INTERVAL_SECS")
            .and_then(|v| v.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache.cleanup_interval);
        let max_size = lookup("CACHE_MAX_SIZE")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.cache.max_size);
        let enabled = lookup("HTTP_ENABLED")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(defaults.http.enabled);
        let port = lookup("HTTP_PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.http.port);

        Self {
            cache: CacheConfig {
                cleanup_interval,
                max_size,
            },
            http: HttpConfig { enabled, port },
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
