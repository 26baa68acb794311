//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - TTL Sweeper: Removes expired cache entries at configured intervals

mod sweeper;

pub use sweeper::Sweeper;
