// --- File: crates/ridelink_groutes/src/routes.rs ---
use axum::{routing::post, Router};
use std::sync::Arc;
// Import the handler function from the sibling module
use crate::handlers::get_tolls_handler;
use ridelink_config::AppConfig;

/// Creates a router containing all routes for the toll-quote feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/get-tolls", post(get_tolls_handler))
        .with_state(config)
}
