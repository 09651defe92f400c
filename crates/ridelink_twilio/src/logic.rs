// --- File: crates/ridelink_twilio/src/logic.rs ---

use ridelink_common::HTTP_CLIENT;
use ridelink_config::TwilioConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

const VERIFY_API_BASE: &str = "https://verify.twilio.com/v2/Services";
const MESSAGES_API_BASE: &str = "https://api.twilio.com/2010-04-01/Accounts";

/// Placeholder for booking fields the front end did not supply.
const PLACEHOLDER: &str = "N/A";
/// Placeholder for driver fields while dispatch has not assigned anyone yet.
const DRIVER_PLACEHOLDER: &str = "Assigned Soon";

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum TwilioError {
    #[error("Twilio request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Twilio rejected the request: Status={status}, Message='{message}'")]
    Rejected { status: String, message: String },
    #[error("Failed to parse Twilio response: {0}")]
    Parse(#[from] serde_json::Error),
}

// --- Data Structures ---

/// Body of `POST /api/send-otp`.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[cfg_attr(feature = "openapi", schema(example = "9876543210"))]
    pub phone_number: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SendOtpResponse {
    pub message: String,
    /// Verification identifier issued by Twilio.
    pub sid: Option<String>,
}

/// Body of `POST /api/verify-otp`.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub phone_number: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "123456"))]
    pub otp_code: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VerifyOtpResponse {
    pub message: String,
    pub status: String,
}

/// Body of `POST /api/send-booking-sms`.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingSmsRequest {
    pub phone_number: Option<String>,
    #[serde(default)]
    pub booking_details: Option<BookingDetails>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingSmsResponse {
    pub message: String,
}

/// Booking fields as sent by the front end. Everything is optional; absent
/// fields render as placeholder text in the outgoing SMS.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    /// Accepted as either a JSON string or a number.
    #[serde(default)]
    pub booking_id: Option<Value>,
    pub pickup: Option<String>,
    pub dropoff: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    #[serde(default)]
    pub fare_details: Option<FareDetails>,
    pub driver_name: Option<String>,
    pub driver_vehicle: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct FareDetails {
    /// Accepted as either a JSON string or a number.
    #[serde(default)]
    pub total: Option<Value>,
}

// --- Structures for Twilio API Responses ---

/// Subset of the Verification / VerificationCheck resource we care about.
#[derive(Deserialize, Debug)]
pub struct VerificationOutcome {
    pub sid: Option<String>,
    pub status: Option<String>,
}

/// Twilio error bodies look like `{"code": 60200, "message": "...", "status": 400}`.
#[derive(Deserialize, Debug, Default)]
struct TwilioErrorBody {
    status: Option<Value>,
    message: Option<String>,
}

/// Maps a non-2xx Twilio response to a `Rejected` error, preferring the
/// status and message from the error body when both are present.
pub(crate) fn rejection_from(http_status: reqwest::StatusCode, body: &str) -> TwilioError {
    let parsed: TwilioErrorBody = serde_json::from_str(body).unwrap_or_default();
    let status = parsed.status.map(|status| match status {
        Value::String(s) => s,
        other => other.to_string(),
    });
    match (status, parsed.message) {
        (Some(status), Some(message)) => TwilioError::Rejected { status, message },
        _ => TwilioError::Rejected {
            status: http_status.as_u16().to_string(),
            message: format!("Unexpected Twilio response: {body}"),
        },
    }
}

// --- Phone Normalization ---

/// Best-effort E.164 normalization.
///
/// Strips every character that is not a digit (a leading `+` survives) and
/// prepends the `+91` country code when the input carried no `+`. Returns
/// `None` only for missing or empty input. Deliberately does not validate
/// digit count or reject whitespace-only input; the verification provider is
/// the authority on number validity.
pub fn normalize_phone_number(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if raw.starts_with('+') {
        Some(format!("+{digits}"))
    } else {
        Some(format!("+91{digits}"))
    }
}

// --- Booking Message ---

fn text_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
    match field.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => fallback,
    }
}

fn value_text(value: &Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Renders the single-line booking confirmation SMS. Internal whitespace is
/// collapsed to single spaces and the result is trimmed.
pub fn build_booking_message(details: &BookingDetails) -> String {
    let booking_id = value_text(&details.booking_id).unwrap_or_else(|| PLACEHOLDER.to_string());
    let fare = details
        .fare_details
        .as_ref()
        .and_then(|fare| value_text(&fare.total))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let message = format!(
        "Your booking {booking_id} is confirmed! Pickup: {pickup} on {date} at {time}. \
         Drop-off: {dropoff}. Fare: Rs {fare}. Driver: {driver} ({vehicle}). \
         Thank you for riding with RideLink!",
        pickup = text_or(&details.pickup, PLACEHOLDER),
        date = text_or(&details.pickup_date, PLACEHOLDER),
        time = text_or(&details.pickup_time, PLACEHOLDER),
        dropoff = text_or(&details.dropoff, PLACEHOLDER),
        driver = text_or(&details.driver_name, DRIVER_PLACEHOLDER),
        vehicle = text_or(&details.driver_vehicle, DRIVER_PLACEHOLDER),
    );

    message.split_whitespace().collect::<Vec<_>>().join(" ")
}

// --- Twilio API Calls ---

/// Asks Twilio Verify to dispatch an OTP over SMS to `to` (E.164).
pub async fn start_verification(
    config: &TwilioConfig,
    to: &str,
) -> Result<VerificationOutcome, TwilioError> {
    let url = format!(
        "{VERIFY_API_BASE}/{}/Verifications",
        config.verify_service_sid
    );
    let params = [("To", to), ("Channel", "sms")];

    let resp = HTTP_CLIENT
        .post(&url)
        .basic_auth(&config.account_sid, Some(&config.auth_token))
        .form(&params)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        tracing::error!("Twilio Verify returned {}: {}", status, body);
        return Err(rejection_from(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

/// Checks an OTP against Twilio Verify and returns the verification status
/// Twilio reports (`"approved"`, `"pending"`, ...). A non-2xx response is an
/// error; a 2xx response with a non-approved status is not.
pub async fn check_verification(
    config: &TwilioConfig,
    to: &str,
    code: &str,
) -> Result<String, TwilioError> {
    let url = format!(
        "{VERIFY_API_BASE}/{}/VerificationCheck",
        config.verify_service_sid
    );
    let params = [("To", to), ("Code", code)];

    let resp = HTTP_CLIENT
        .post(&url)
        .basic_auth(&config.account_sid, Some(&config.auth_token))
        .form(&params)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        tracing::error!("Twilio VerificationCheck returned {}: {}", status, body);
        return Err(rejection_from(status, &body));
    }

    let outcome: VerificationOutcome = serde_json::from_str(&body)?;
    Ok(outcome.status.unwrap_or_else(|| "unknown".to_string()))
}

/// Sends a free-form SMS via the Twilio Messages API.
pub async fn send_sms(
    config: &TwilioConfig,
    to: &str,
    from: &str,
    body_text: &str,
) -> Result<(), TwilioError> {
    let url = format!("{MESSAGES_API_BASE}/{}/Messages.json", config.account_sid);
    let params = [("To", to), ("From", from), ("Body", body_text)];

    let resp = HTTP_CLIENT
        .post(&url)
        .basic_auth(&config.account_sid, Some(&config.auth_token))
        .form(&params)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        tracing::error!("Twilio Messages returned {}: {}", status, body);
        return Err(rejection_from(status, &body));
    }

    tracing::info!("SMS sent to {}", to);
    Ok(())
}
