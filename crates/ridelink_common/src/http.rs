// --- File: crates/ridelink_common/src/http.rs ---
use axum::Json;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Default timeout for outbound provider requests in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A static HTTP client reused for all outbound provider calls.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
});

/// Builds the standard JSON error body returned by all handlers.
///
/// Every non-2xx response from this service carries `{"error": "..."}` so the
/// front end has a single shape to inspect.
pub fn error_body(message: impl std::fmt::Display) -> Json<Value> {
    Json(json!({ "error": message.to_string() }))
}
