// --- File: crates/ridelink_groutes/src/handlers.rs ---
use crate::logic::{fetch_toll_estimate, GroutesError, TollQuoteRequest, TollQuoteResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use ridelink_common::http::error_body;
use ridelink_config::AppConfig;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

type HandlerError = (StatusCode, Json<Value>);

/// Handler for `POST /api/get-tolls`.
#[axum::debug_handler]
pub async fn get_tolls_handler(
    State(config): State<Arc<AppConfig>>,
    Json(payload): Json<TollQuoteRequest>,
) -> Result<Json<TollQuoteResponse>, HandlerError> {
    let pickup = payload.pickup.as_deref().filter(|s| !s.is_empty());
    let dropoff = payload.dropoff.as_deref().filter(|s| !s.is_empty());
    let (Some(pickup), Some(dropoff)) = (pickup, dropoff) else {
        return Err((
            StatusCode::BAD_REQUEST,
            error_body("pickup and dropoff are required."),
        ));
    };

    let Some(groutes) = config.groutes.as_ref() else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            error_body("Routing provider is not configured."),
        ));
    };

    info!("Fetching toll estimate: {} -> {}", pickup, dropoff);
    match fetch_toll_estimate(groutes, pickup, dropoff).await {
        Ok(toll_amount) => Ok(Json(TollQuoteResponse { toll_amount })),
        Err(GroutesError::Upstream { status, message }) => {
            // Mirror the provider's status code back to the caller.
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            Err((code, error_body(message)))
        }
        Err(err) => {
            error!("Toll estimate failed: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body(format!("Failed to fetch toll data: {err}")),
            ))
        }
    }
}
