use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{bad_request, ApiError, AppState};
use crate::libraries::build_circle_polygon;
use crate::models::GeoPoint;

#[derive(Debug, Deserialize)]
pub struct CircleQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius: Option<f64>,
}

/// Proximity circle around a point as a GeoJSON polygon feature
pub async fn get_circle(
    State(settings): State<AppState>,
    Query(query): Query<CircleQuery>,
) -> Result<Json<Value>, ApiError> {
    let center = GeoPoint::new(query.lat, query.lng);
    if !center.is_valid() {
        return Err(bad_request("Invalid coordinates provided."));
    }

    let radius = query.radius.unwrap_or_else(|| settings.radius.as_f64());
    if !radius.is_finite() || radius < 0.0 {
        return Err(bad_request(format!("Invalid radius: {}", radius)));
    }

    debug!(
        "Building circle at ({}, {}) radius {}m",
        center.latitude, center.longitude, radius
    );

    Ok(Json(build_circle_polygon(&center, radius).to_geojson()))
}
