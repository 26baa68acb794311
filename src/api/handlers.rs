//! API Handlers
//!
//! HTTP request handlers for each cache endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Query, State},
    http::{HeaderMap, StatusCode},
};

use crate::cache::{Cache, CacheValue};
use crate::config::CacheConfig;
use crate::error::{ApiError, Result};
use crate::models::{ttl_from_headers, KeyQuery};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub cache: Arc<Cache<CacheValue>>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Arc<Cache<CacheValue>>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState with a fresh cache built from configuration.
    ///
    /// Must be called inside a Tokio runtime, since the cache starts its sweeper.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(Arc::new(Cache::new(config.clone())))
    }
}

/// Handler for GET /get
///
/// Returns the stored value as text, with surrounding whitespace trimmed.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    headers: HeaderMap,
) -> Result<String> {
    let key = query.resolve(&headers)?;
    let value = state.cache.get(&key).ok_or(ApiError::NotFound)?;

    Ok(value.to_string().trim().to_owned())
}

/// Handler for POST /set
///
/// Stores the raw request body under the key, applying `ttl-seconds` when
/// it holds a positive integer.
pub async fn set_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<StatusCode> {
    let key = query.resolve(&headers)?;
    let body = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let value = CacheValue::Bytes(body.to_vec());

    match ttl_from_headers(&headers) {
        Some(ttl) => state.cache.set_with_ttl(key, value, ttl),
        None => state.cache.set(key, value),
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for DELETE /delete
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
    headers: HeaderMap,
) -> Result<StatusCode> {
    let key = query.resolve(&headers)?;

    if state.cache.delete(&key) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

/// Handler for GET /health
pub async fn health_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::from_config(&CacheConfig::default())
    }

    fn key_query(key: &str) -> Query<KeyQuery> {
        Query(KeyQuery {
            key: Some(key.to_string()),
        })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let status = set_handler(
            State(state.clone()),
            key_query("test_key"),
            HeaderMap::new(),
            Ok(Bytes::from_static(b"  test_value\n")),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let value = get_handler(State(state.clone()), key_query("test_key"), HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(value, "test_value");

        // Stored untouched, only the rendering is trimmed
        assert_eq!(
            state.cache.get("test_key"),
            Some(CacheValue::Bytes(b"  test_value\n".to_vec()))
        );
    }

    #[tokio::test]
    async fn test_set_with_ttl_header() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        headers.insert("ttl-seconds", "1".parse().unwrap());

        set_handler(
            State(state.clone()),
            key_query("ttl_key"),
            headers,
            Ok(Bytes::from_static(b"v")),
        )
        .await
        .unwrap();

        assert!(state.cache.exists("ttl_key"));
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(!state.cache.exists("ttl_key"));
    }

    #[tokio::test]
    async fn test_get_renders_any_value() {
        let state = test_state();
        state.cache.set("text", CacheValue::from("hello"));
        state.cache.set("json", CacheValue::from(serde_json::json!([1, 2])));

        let text = get_handler(State(state.clone()), key_query("text"), HeaderMap::new())
            .await
            .unwrap();
        let json = get_handler(State(state), key_query("json"), HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(text, "hello");
        assert_eq!(json, "[1,2]");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(State(state), key_query("nonexistent"), HeaderMap::new()).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_missing_key_rejected() {
        let state = test_state();

        let result = get_handler(
            State(state.clone()),
            Query(KeyQuery::default()),
            HeaderMap::new(),
        )
        .await;
        assert!(matches!(result, Err(ApiError::MissingKey)));

        let result = set_handler(
            State(state),
            Query(KeyQuery::default()),
            HeaderMap::new(),
            Ok(Bytes::new()),
        )
        .await;
        assert!(matches!(result, Err(ApiError::MissingKey)));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        state.cache.set("to_delete", CacheValue::from("value"));

        let status = delete_handler(State(state.clone()), key_query("to_delete"), HeaderMap::new())
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = delete_handler(State(state), key_query("to_delete"), HeaderMap::new()).await;
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_health_handler() {
        assert_eq!(health_handler().await, "ok");
    }
}
