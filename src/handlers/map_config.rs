use axum::{extract::State, Json};
use serde::Serialize;

use super::AppState;
use crate::config::RadiusOption;
use crate::models::GeoPoint;

#[derive(Debug, Serialize)]
pub struct MapConfigResponse {
    pub style: String,
    pub access_token: String,
    pub radius_options: Vec<RadiusOption>,
    pub default_radius: RadiusOption,
    pub default_center: GeoPoint,
    pub default_zoom: f64,
}

/// Settings the front end needs to initialize its map
pub async fn get_map_config(State(settings): State<AppState>) -> Json<MapConfigResponse> {
    Json(MapConfigResponse {
        style: settings.style.clone(),
        access_token: settings.access_token.clone(),
        radius_options: RadiusOption::ALL.to_vec(),
        default_radius: settings.radius,
        default_center: settings.default_center,
        default_zoom: settings.default_zoom,
    })
}
