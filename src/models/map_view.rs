use serde::{Deserialize, Serialize};

use super::{
    circle::CirclePolygon,
    location::GeoPoint,
    pin::{PinInfo, SampledPin},
};
use crate::config::MapSettings;

/// Everything the map view shows, held by a single owner and replaced
/// wholesale on every update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: f64,
    pub user_marker: Option<GeoPoint>,
    pub overlay: Option<CirclePolygon>,
    pub pins: Vec<SampledPin>,
    pub initialized: bool,
}

impl MapView {
    /// An uninitialized view parked at the configured default center
    pub fn new(settings: &MapSettings) -> Self {
        Self {
            center: settings.default_center,
            zoom: settings.default_zoom,
            user_marker: None,
            overlay: None,
            pins: Vec::new(),
            initialized: false,
        }
    }
}

/// Modal content handed to the notification surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Info {
        title: String,
        fields: Vec<(String, String)>,
    },
    Error {
        title: String,
        message: String,
    },
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Notification::Error {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// Labeled details for an activated pin
    pub fn for_pin(info: &PinInfo) -> Self {
        Notification::Info {
            title: info.name.clone(),
            fields: vec![
                ("Address".to_string(), info.address.clone()),
                ("Opens".to_string(), info.opening_hours.clone()),
                ("Closes".to_string(), info.closing_hours.clone()),
                ("Phone".to_string(), info.phone.clone()),
            ],
        }
    }
}
