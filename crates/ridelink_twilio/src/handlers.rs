// --- File: crates/ridelink_twilio/src/handlers.rs ---
use crate::logic::{
    build_booking_message, check_verification, normalize_phone_number, send_sms,
    start_verification, BookingSmsRequest, BookingSmsResponse, SendOtpRequest, SendOtpResponse,
    VerifyOtpRequest, VerifyOtpResponse,
};
use axum::{extract::State, http::StatusCode, response::Json};
use ridelink_common::http::error_body;
use ridelink_config::{AppConfig, TwilioConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};

type HandlerError = (StatusCode, Json<Value>);

fn twilio_config(config: &AppConfig) -> Result<&TwilioConfig, HandlerError> {
    config.twilio.as_ref().ok_or((
        StatusCode::INTERNAL_SERVER_ERROR,
        error_body("Twilio is not configured."),
    ))
}

/// Handler for `POST /api/send-otp`.
#[axum::debug_handler]
pub async fn send_otp_handler(
    State(config): State<Arc<AppConfig>>,
    Json(payload): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, HandlerError> {
    let Some(phone) = normalize_phone_number(payload.phone_number.as_deref()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            error_body("A valid phone number is required."),
        ));
    };
    let twilio = twilio_config(&config)?;

    info!("Sending OTP to {}", phone);
    match start_verification(twilio, &phone).await {
        Ok(outcome) => Ok(Json(SendOtpResponse {
            message: "OTP sent successfully.".to_string(),
            sid: outcome.sid,
        })),
        Err(err) => {
            error!("Failed to send OTP to {}: {}", phone, err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_body(err)))
        }
    }
}

/// Handler for `POST /api/verify-otp`.
#[axum::debug_handler]
pub async fn verify_otp_handler(
    State(config): State<Arc<AppConfig>>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, HandlerError> {
    let phone = normalize_phone_number(payload.phone_number.as_deref());
    let code = payload.otp_code.as_deref().filter(|code| !code.is_empty());
    let (Some(phone), Some(code)) = (phone, code) else {
        return Err((
            StatusCode::BAD_REQUEST,
            error_body("phoneNumber and otpCode are required."),
        ));
    };
    let twilio = twilio_config(&config)?;

    match check_verification(twilio, &phone, code).await {
        Ok(status) if status == "approved" => Ok(Json(VerifyOtpResponse {
            message: "Phone number verified successfully.".to_string(),
            status,
        })),
        Ok(status) => {
            info!("OTP for {} not approved, status: {}", phone, status);
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "OTP verification failed.",
                    "status": status,
                })),
            ))
        }
        Err(err) => {
            error!("Failed to verify OTP for {}: {}", phone, err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_body(err)))
        }
    }
}

/// Handler for `POST /api/send-booking-sms`.
#[axum::debug_handler]
pub async fn send_booking_sms_handler(
    State(config): State<Arc<AppConfig>>,
    Json(payload): Json<BookingSmsRequest>,
) -> Result<Json<BookingSmsResponse>, HandlerError> {
    let (Some(raw_phone), Some(details)) = (
        payload.phone_number.as_deref(),
        payload.booking_details.as_ref(),
    ) else {
        return Err((
            StatusCode::BAD_REQUEST,
            error_body("phoneNumber and bookingDetails are required."),
        ));
    };

    let message = build_booking_message(details);
    let Some(to) = normalize_phone_number(Some(raw_phone)) else {
        return Err((
            StatusCode::BAD_REQUEST,
            error_body("A valid phone number is required."),
        ));
    };

    let twilio = twilio_config(&config)?;
    let Some(from) = twilio.phone_number.as_deref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body("SMS sender number is not configured."),
        ));
    };

    info!("Sending booking confirmation SMS to {}", to);
    match send_sms(twilio, &to, from, &message).await {
        Ok(()) => Ok(Json(BookingSmsResponse {
            message: "Booking confirmation SMS sent.".to_string(),
        })),
        Err(err) => {
            error!("Failed to send booking SMS to {}: {}", to, err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, error_body(err)))
        }
    }
}
