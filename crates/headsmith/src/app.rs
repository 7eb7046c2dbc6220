use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{healthz, livez},
        pages::{index, preview},
        seo::{batch_seo, delete_seo, get_seo, render_seo, upsert_seo, validate_seo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        .route(
            "/seo",
            get(get_seo)
                .put(upsert_seo)
                .post(upsert_seo)
                .delete(delete_seo),
        )
        .route("/seo/render", get(render_seo))
        .route("/seo/batch", get(batch_seo))
        .route("/seo/validate", post(validate_seo))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/", get(index))
        .route("/preview", get(preview))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}
