// --- File: crates/services/ridelink_backend/src/lib.rs ---
use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use ridelink_config::AppConfig;
use ridelink_groutes::routes as groutes_routes;
use ridelink_twilio::routes as twilio_routes;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Plain-text liveness string served at `/`.
pub const LIVENESS_MESSAGE: &str = "RideLink API is running";

/// Assembles the full application router: liveness route, feature routers
/// nested under `/api`, CORS for the configured front-end origin, and the
/// Swagger UI when the `openapi` feature is enabled.
pub fn build_app(config: Arc<AppConfig>) -> Router {
    let api_router = Router::new()
        .merge(twilio_routes::routes(config.clone()))
        .merge(groutes_routes::routes(config.clone()));

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .server
                .allowed_origin
                .parse::<HeaderValue>()
                .expect("server.allowed_origin must be a valid origin"),
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = Router::new()
        .route("/", get(|| async { LIVENESS_MESSAGE }))
        .nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use ridelink_groutes::doc::GroutesApiDoc;
        use ridelink_twilio::doc::TwilioApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the merged OpenAPI documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "RideLink API",
                version = "0.1.0",
                description = "Phone verification and toll estimation for the RideLink booking front end"
            ),
            tags( (name = "RideLink", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(TwilioApiDoc::openapi());
        openapi_doc.merge(GroutesApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    app.layer(cors)
}
