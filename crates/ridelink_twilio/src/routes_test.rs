#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use ridelink_config::{AppConfig, ServerConfig};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_config() -> Arc<AppConfig> {
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

    fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn send_otp_route_is_wired() {
        let app = routes(test_config());
        let response = app
            .oneshot(json_post("/send-otp", serde_json::json!({"phoneNumber": ""})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn verify_otp_route_is_wired() {
        let app = routes(test_config());
        let response = app
            .oneshot(json_post("/verify-otp", serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = routes(test_config());
        let response = app
            .oneshot(json_post("/send-email", serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
