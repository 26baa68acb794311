//! API Module
//!
//! HTTP handlers and routing for the cache front end.
//!
//! # Endpoints
//! - `GET /get` - Retrieve a value by key
//! - `POST /set` - Store a value
//! - `DELETE /delete` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
