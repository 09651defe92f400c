// File: services/ridelink_backend/src/main.rs
use ridelink_backend::build_app;
use ridelink_config::{load_config, validate_config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    ridelink_common::logging::init();

    // Missing or incomplete provider credentials are fatal here, never
    // discovered mid-request.
    let config = Arc::new(load_config().expect("Failed to load config"));
    validate_config(&config).expect("Configuration is incomplete");

    let app = build_app(config.clone());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
