// --- File: crates/ridelink_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The single front-end origin allowed by the CORS layer.
    pub allowed_origin: String,
}

// --- Twilio Config ---
// Holds account identifiers and secrets. Secrets are expected to arrive via
// environment variables (RIDELINK__TWILIO__ACCOUNT_SID etc.), usually from .env.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,       // RIDELINK__TWILIO__ACCOUNT_SID
    pub auth_token: String,        // RIDELINK__TWILIO__AUTH_TOKEN
    pub verify_service_sid: String, // RIDELINK__TWILIO__VERIFY_SERVICE_SID
    /// Sender number for outbound booking SMS. Not required at startup; its
    /// absence is a per-request error on the booking-SMS route only.
    #[serde(default)]
    pub phone_number: Option<String>, // RIDELINK__TWILIO__PHONE_NUMBER
}

// --- Google Routes Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GroutesConfig {
    pub api_key: String, // RIDELINK__GROUTES__API_KEY
    /// Overridable for tests pointed at a local stub server.
    #[serde(default)]
    pub base_url: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Provider Configurations ---
    #[serde(default)]
    pub twilio: Option<TwilioConfig>,
    #[serde(default)]
    pub groutes: Option<GroutesConfig>,
}
