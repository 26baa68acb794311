//! Request parameters for the cache HTTP front end
//!
//! Keys arrive in a `key` header or a `key` query parameter; an optional
//! `ttl-seconds` header applies a TTL to writes.

use std::time::Duration;

use axum::http::HeaderMap;
use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Header carrying the cache key
pub const KEY_HEADER: &str = "key";

/// Header carrying the TTL of a write, in seconds
pub const TTL_HEADER: &str = "ttl-seconds";

/// Query string of every keyed endpoint (`?key=...`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyQuery {
    #[serde(default)]
    pub key: Option<String>,
}

impl KeyQuery {
    /// Resolves the request key: the header wins, then the query parameter.
    ///
    /// Empty values count as missing.
    pub fn resolve(&self, headers: &HeaderMap) -> Result<String> {
        headers
            .get(KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .or_else(|| self.key.clone().filter(|key| !key.is_empty()))
            .ok_or(ApiError::MissingKey)
    }
}

/// Reads the `ttl-seconds` header.
///
/// Only a positive integer yields a TTL; anything else means "no expiration".
pub fn ttl_from_headers(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(TTL_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(|secs| Duration::from_secs(secs.unsigned_abs()))
}
