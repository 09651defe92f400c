// --- File: crates/ridelink_groutes/src/logic.rs ---

use ridelink_common::HTTP_CLIENT;
use ridelink_config::GroutesConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

const ROUTES_API_URL: &str = "https://routes.googleapis.com/directions/v2:computeRoutes";
/// Limits the response (and the billed fields) to what the toll quote needs.
const FIELD_MASK: &str = "routes.duration,routes.distanceMeters,routes.travelAdvisory.tollInfo";
/// Only toll prices in this currency are summed; no conversion is attempted.
const TOLL_CURRENCY: &str = "INR";
const NANOS_PER_UNIT: f64 = 1_000_000_000.0;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum GroutesError {
    #[error("Routes API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Routes API returned an error: Status={status}, Message='{message}'")]
    Upstream { status: u16, message: String },
    #[error("Failed to parse Routes API response: {0}")]
    Parse(#[from] serde_json::Error),
}

// --- Data Structures ---

/// Body of `POST /api/get-tolls`. `distance` and `vehicleType` are accepted
/// for wire compatibility with the front end but are not forwarded upstream.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TollQuoteRequest {
    #[cfg_attr(feature = "openapi", schema(example = "MG Road, Bengaluru"))]
    pub pickup: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Kempegowda International Airport"))]
    pub dropoff: Option<String>,
    #[serde(default)]
    pub distance: Option<Value>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TollQuoteResponse {
    /// Total estimated INR tolls on the primary route, rounded to 2 decimals.
    #[cfg_attr(feature = "openapi", schema(example = 120.5))]
    pub toll_amount: f64,
}

// --- Structures for the computeRoutes Request Payload ---

#[derive(Serialize, Debug)]
struct Waypoint<'a> {
    address: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RouteModifiers {
    avoid_tolls: bool,
    avoid_highways: bool,
    toll_passes: [&'static str; 1],
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ComputeRoutesRequest<'a> {
    origin: Waypoint<'a>,
    destination: Waypoint<'a>,
    travel_mode: &'static str,
    routing_preference: &'static str,
    compute_alternative_routes: bool,
    route_modifiers: RouteModifiers,
    extra_computations: [&'static str; 1],
}

// --- Structures for the computeRoutes Response ---

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub duration: Option<String>,
    pub distance_meters: Option<i64>,
    #[serde(default)]
    pub travel_advisory: Option<TravelAdvisory>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelAdvisory {
    #[serde(default)]
    pub toll_info: Option<TollInfo>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TollInfo {
    #[serde(default)]
    pub estimated_price: Vec<TollPrice>,
}

/// Fixed-point money as the Routes API sends it: integer whole units plus a
/// fractional part in billionths. Both pieces arrive as numbers or as
/// numeric strings depending on the serializer, so they are kept loose here.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TollPrice {
    pub currency_code: Option<String>,
    #[serde(default)]
    pub units: Option<Value>,
    #[serde(default)]
    pub nanos: Option<Value>,
}

// --- Toll Aggregation ---

/// Coerces one piece of a (units, nanos) pair. A missing piece counts as 0;
/// a piece that is present but not numeric disqualifies the entry.
fn coerce_number(piece: Option<&Value>) -> Option<f64> {
    match piece {
        None | Some(Value::Null) => Some(0.0),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    }
}

/// Sums the INR entries of an estimated-price list. Entries in other
/// currencies are ignored; entries with a non-numeric piece are skipped
/// rather than failing the whole quote.
pub fn sum_inr_toll_prices(prices: &[TollPrice]) -> f64 {
    let mut total = 0.0;
    for price in prices {
        if price.currency_code.as_deref() != Some(TOLL_CURRENCY) {
            continue;
        }
        let (Some(units), Some(nanos)) = (
            coerce_number(price.units.as_ref()),
            coerce_number(price.nanos.as_ref()),
        ) else {
            continue;
        };
        total += units + nanos / NANOS_PER_UNIT;
    }
    total
}

/// Rounds to 2 decimal places, forcing anything non-finite to 0.
pub fn round_toll_total(total: f64) -> f64 {
    let rounded = (total * 100.0).round() / 100.0;
    if rounded.is_finite() {
        rounded
    } else {
        0.0
    }
}

/// Extracts the rounded INR toll total from a computeRoutes response. A
/// response without routes or toll advisory info yields 0.
pub fn toll_amount_from_response(response: &ComputeRoutesResponse) -> f64 {
    let prices = response
        .routes
        .first()
        .and_then(|route| route.travel_advisory.as_ref())
        .and_then(|advisory| advisory.toll_info.as_ref())
        .map(|toll_info| toll_info.estimated_price.as_slice())
        .unwrap_or_default();
    round_toll_total(sum_inr_toll_prices(prices))
}

/// Maps a non-2xx Routes API response, pulling `error.message` out of the
/// standard Google error envelope when it parses.
pub(crate) fn upstream_from(http_status: reqwest::StatusCode, body: &str) -> GroutesError {
    #[derive(Deserialize, Default)]
    struct ErrorEnvelope {
        #[serde(default)]
        error: ErrorDetail,
    }
    #[derive(Deserialize, Default)]
    struct ErrorDetail {
        message: Option<String>,
    }

    let parsed: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();
    GroutesError::Upstream {
        status: http_status.as_u16(),
        message: parsed
            .error
            .message
            .unwrap_or_else(|| "Failed to fetch toll data from routing provider.".to_string()),
    }
}

// --- Routes API Call ---

/// Asks the Routes API for a traffic-aware drive between two addresses and
/// returns the rounded INR toll total for the primary route.
pub async fn fetch_toll_estimate(
    config: &GroutesConfig,
    pickup: &str,
    dropoff: &str,
) -> Result<f64, GroutesError> {
    let request = ComputeRoutesRequest {
        origin: Waypoint { address: pickup },
        destination: Waypoint { address: dropoff },
        travel_mode: "DRIVE",
        routing_preference: "TRAFFIC_AWARE_OPTIMAL",
        compute_alternative_routes: false,
        route_modifiers: RouteModifiers {
            avoid_tolls: false,
            avoid_highways: false,
            toll_passes: ["IN_FASTAG"],
        },
        extra_computations: ["TOLLS"],
    };

    let url = config.base_url.as_deref().unwrap_or(ROUTES_API_URL);
    let resp = HTTP_CLIENT
        .post(url)
        .header("X-Goog-Api-Key", &config.api_key)
        .header("X-Goog-FieldMask", FIELD_MASK)
        .json(&request)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if !status.is_success() {
        tracing::error!("Routes API returned {}: {}", status, body);
        return Err(upstream_from(status, &body));
    }

    let parsed: ComputeRoutesResponse = serde_json::from_str(&body)?;
    Ok(toll_amount_from_response(&parsed))
}
