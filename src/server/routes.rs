//! Router configuration for the web server.

use axum::{routing::{get, post}, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Card icon resolution
        .route("/api/v1/card/icon", get(handlers::card_icons))
        // Asset upload and retrieval
        .route("/api/v1/upload", post(handlers::upload))
        .route("/ext-resources/*path", get(handlers::serve_asset))
        // Built-in glyph catalog
        .route("/api/v1/category/icon", get(handlers::category_icons))
        // Health check
        .route("/api/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
