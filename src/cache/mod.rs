//! Cache Module
//!
//! Provides an in-memory key-value cache with lazy and background TTL expiration.

mod engine;
mod entry;
mod store;
mod value;


// Re-export public types
pub use engine::Cache;
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use value::CacheValue;
