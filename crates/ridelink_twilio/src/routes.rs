// --- File: crates/ridelink_twilio/src/routes.rs ---
use axum::{routing::post, Router};
use std::sync::Arc;
// Import the handler functions from the sibling module
use crate::handlers::{send_booking_sms_handler, send_otp_handler, verify_otp_handler};
use ridelink_config::AppConfig;

/// Creates a router containing all routes for the Twilio feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/send-otp", post(send_otp_handler))
        .route("/verify-otp", post(verify_otp_handler))
        .route("/send-booking-sms", post(send_booking_sms_handler))
        .with_state(config)
}
