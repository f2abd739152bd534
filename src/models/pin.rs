use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::location::GeoPoint;

/// Descriptive metadata shown when a pin is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinInfo {
    pub name: String,
    pub address: String,
    pub opening_hours: String,
    pub closing_hours: String,
    pub phone: String,
}

/// A generated position paired with its metadata.
///
/// Pins have no identity; two pins may share the same `info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledPin {
    pub position: GeoPoint,
    pub info: PinInfo,
}

impl SampledPin {
    pub fn new(position: GeoPoint, info: PinInfo) -> Self {
        Self { position, info }
    }

    /// GeoJSON `Feature` with a `Point` geometry and the pin info as properties
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": self.position.to_lng_lat(),
            },
            "properties": self.info,
        })
    }
}

/// GeoJSON `FeatureCollection` for a batch of pins
pub fn pins_to_geojson(pins: &[SampledPin]) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": pins.iter().map(SampledPin::to_geojson).collect::<Vec<_>>(),
    })
}
