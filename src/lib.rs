//! TTL Cache - An embeddable in-memory key-value cache
//!
//! Entries may carry a time-to-live. Expired entries are hidden from reads
//! immediately and removed lazily on access or by a background sweeper.
//! A minimal HTTP front end exposes get/set/delete over the same engine.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, CacheValue};
pub use config::{CacheConfig, Config, HttpConfig};
pub use server::Server;
