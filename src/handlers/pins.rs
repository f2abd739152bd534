use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{bad_request, ApiError, AppState, MAX_PIN_COUNT};
use crate::libraries::{sample_pins, PinFilter};
use crate::models::{pins_to_geojson, GeoPoint};

#[derive(Debug, Deserialize)]
pub struct PinsQuery {
    pub lat: f64,
    pub lng: f64,
    pub radius: Option<f64>,
    pub count: Option<usize>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Random demonstration pins around a point as a GeoJSON feature collection
pub async fn get_pins(
    State(settings): State<AppState>,
    Query(query): Query<PinsQuery>,
) -> Result<Json<Value>, ApiError> {
    let center = GeoPoint::new(query.lat, query.lng);
    if !center.is_valid() {
        return Err(bad_request("Invalid coordinates provided."));
    }

    let radius = query.radius.unwrap_or_else(|| settings.radius.as_f64());
    if !radius.is_finite() || radius <= 0.0 {
        return Err(bad_request(format!("Invalid radius: {}", radius)));
    }

    let count = query.count.unwrap_or(settings.pin_count).min(MAX_PIN_COUNT);
    let pins = sample_pins(&center, radius, count);

    let filter = PinFilter::new(query.name, query.address);
    let pins = if filter.is_empty() { pins } else { filter.apply(&pins) };

    debug!("Sampled {} pins within {}m", pins.len(), radius);

    Ok(Json(pins_to_geojson(&pins)))
}
