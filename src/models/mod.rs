//! Request models for the cache HTTP front end
//!
//! Every endpoint speaks plain text, so only the request side needs types.

pub mod requests;

// Re-export commonly used types
pub use requests::{ttl_from_headers, KeyQuery, KEY_HEADER, TTL_HEADER};
