//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the conversion API router
    let api = Router::new()
        .route("/convert", get(handlers::convert))
        .route("/units", get(handlers::list_units));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Profile, UnitTable};

    #[test]
    fn test_router_creation() {
        let table = UnitTable::with_profile(Profile::Compat).unwrap();
        let state = AppState::new(table);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
