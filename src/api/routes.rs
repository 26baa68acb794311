//! API Routes
//!
//! Configures the Axum router with all cache endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{delete_handler, get_handler, health_handler, set_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /get` - Retrieve a value as text
/// - `POST /set` - Store the request body, optional `ttl-seconds` header
/// - `DELETE /delete` - Delete a key
/// - `GET /health` - Liveness probe
///
/// Keyed endpoints read the key from the `key` header, else the `key`
/// query parameter.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
/// - Body limit: Disabled, `/set` stores bodies of any size
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/get", get(get_handler))
        .route("/set", post(set_handler))
        .route("/delete", delete(delete_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
