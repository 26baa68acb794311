//! Cache Value Module
//!
//! Opaque payload type used by the HTTP front end and the server binary.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Cache Value ==
/// A stored payload of text, raw bytes or arbitrary structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum CacheValue {
    /// UTF-8 text, rendered unchanged
    Text(String),
    /// Raw bytes, rendered as (lossily decoded) text
    Bytes(Vec<u8>),
    /// Any other value, rendered in its JSON form
    Json(serde_json::Value),
}

impl fmt::Display for CacheValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheValue::Text(text) => f.write_str(text),
            CacheValue::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
            CacheValue::Json(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for CacheValue {
    fn from(text: String) -> Self {
        CacheValue::Text(text)
    }
}

impl From<&str> for CacheValue {
    fn from(text: &str) -> Self {
        CacheValue::Text(text.to_owned())
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(bytes: Vec<u8>) -> Self {
        CacheValue::Bytes(bytes)
    }
}

impl From<serde_json::Value> for CacheValue {
    fn from(value: serde_json::Value) -> Self {
        CacheValue::Json(value)
    }
}
