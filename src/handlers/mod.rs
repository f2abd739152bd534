mod circle;
mod map_config;
mod pins;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::MapSettings;

pub use circle::get_circle;
pub use map_config::get_map_config;
pub use pins::get_pins;

/// Upper bound on pins generated per request
pub const MAX_PIN_COUNT: usize = 500;

pub type AppState = Arc<MapSettings>;

pub type ApiError = (StatusCode, Json<Value>);

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message.into() })),
    )
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "geomaps",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn router(settings: MapSettings) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api/config", get(get_map_config))
        .route("/api/circle", get(get_circle))
        .route("/api/pins", get(get_pins))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(settings))
}
