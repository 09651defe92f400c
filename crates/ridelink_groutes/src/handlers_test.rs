#[cfg(test)]
mod tests {
    use crate::handlers::get_tolls_handler;
    use crate::logic::TollQuoteRequest;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use ridelink_config::{AppConfig, GroutesConfig, ServerConfig};
    use std::sync::Arc;

    // No routing credentials: proves validation rejects the request before
    // any outbound call could be attempted.
    fn config_without_providers() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 5000,
                allowed_origin: "http://localhost:5173".to_string(),
            },
            twilio: None,
            groutes: None,
        })
    }

    fn request(value: serde_json::Value) -> TollQuoteRequest {
        serde_json::from_value(value).unwrap()
    }

    // Binds a one-route stub standing in for the Routes API and returns a
    // config whose base_url points at it.
    async fn config_with_stub(status: StatusCode, body: serde_json::Value) -> Arc<AppConfig> {
        let stub = Router::new().route(
            "/computeRoutes",
            post(move || async move { (status, Json(body.clone())) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub).await.unwrap();
        });

        let mut config = (*config_without_providers()).clone();
        config.groutes = Some(GroutesConfig {
            api_key: "test-key".to_string(),
            base_url: Some(format!("http://{addr}/computeRoutes")),
        });
        Arc::new(config)
    }

    #[tokio::test]
    async fn missing_pickup_is_rejected() {
        let result = get_tolls_handler(
            State(config_without_providers()),
            Json(request(serde_json::json!({ "dropoff": "Airport" }))),
        )
        .await;

        let (status, Json(body)) = result.expect_err("missing pickup must be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("pickup"));
    }

    #[tokio::test]
    async fn empty_dropoff_is_rejected() {
        let result = get_tolls_handler(
            State(config_without_providers()),
            Json(request(
                serde_json::json!({ "pickup": "MG Road", "dropoff": "" }),
            )),
        )
        .await;

        assert_eq!(result.unwrap_err().0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn whitespace_addresses_pass_validation() {
        // Only missing/empty addresses are a 400; whitespace-only input gets
        // past validation and fails here on the absent provider config.
        let result = get_tolls_handler(
            State(config_without_providers()),
            Json(request(
                serde_json::json!({ "pickup": "   ", "dropoff": "   " }),
            )),
        )
        .await;

        assert_eq!(result.unwrap_err().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn upstream_status_is_forwarded_not_hardcoded() {
        let config = config_with_stub(
            StatusCode::FORBIDDEN,
            serde_json::json!({
                "error": {
                    "code": 403,
                    "message": "API key not valid.",
                    "status": "PERMISSION_DENIED"
                }
            }),
        )
        .await;

        let result = get_tolls_handler(
            State(config),
            Json(request(
                serde_json::json!({ "pickup": "MG Road", "dropoff": "Airport" }),
            )),
        )
        .await;

        let (status, Json(body)) = result.expect_err("provider 403 must be surfaced");
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "API key not valid.");
    }

    #[tokio::test]
    async fn upstream_success_yields_rounded_toll_amount() {
        let config = config_with_stub(
            StatusCode::OK,
            serde_json::json!({
                "routes": [{
                    "duration": "1800s",
                    "distanceMeters": 24000,
                    "travelAdvisory": { "tollInfo": { "estimatedPrice": [
                        { "currencyCode": "INR", "units": "120", "nanos": "500000000" }
                    ]}}
                }]
            }),
        )
        .await;

        let result = get_tolls_handler(
            State(config),
            Json(request(
                serde_json::json!({ "pickup": "MG Road", "dropoff": "Airport" }),
            )),
        )
        .await;

        let Json(response) = result.expect("stubbed provider response must succeed");
        assert_eq!(response.toll_amount, 120.5);
    }

    #[tokio::test]
    async fn unused_fields_are_accepted() {
        // distance and vehicleType deserialize fine but play no part in
        // validation; with both addresses missing the request still 400s.
        let result = get_tolls_handler(
            State(config_without_providers()),
            Json(request(
                serde_json::json!({ "distance": 12.5, "vehicleType": "sedan" }),
            )),
        )
        .await;

        assert_eq!(result.unwrap_err().0, StatusCode::BAD_REQUEST);
    }
}
