use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Map SDK access token, passed through to the front end untouched
    #[serde(default)]
    pub mapbox_token: String,

    #[serde(default = "default_map_style")]
    pub map_style: String,

    #[serde(default = "default_radius_meters")]
    pub radius_meters: u32,

    #[serde(default = "default_pin_count")]
    pub pin_count: usize,

    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    #[serde(default = "default_zoom")]
    pub default_zoom: f64,

    // Run a tracker over a simulated walk alongside the HTTP server
    #[serde(default)]
    pub simulate_walk: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    /// Validate the raw values into settings the map layer can use
    pub fn settings(&self) -> Result<MapSettings, ConfigError> {
        let radius = RadiusOption::try_from(self.radius_meters)?;

        let default_center = GeoPoint::new(self.default_latitude, self.default_longitude);
        if !default_center.is_valid() {
            return Err(ConfigError::InvalidDefaultCenter {
                latitude: self.default_latitude,
                longitude: self.default_longitude,
            });
        }

        Ok(MapSettings {
            access_token: self.mapbox_token.clone(),
            style: self.map_style.clone(),
            radius,
            pin_count: self.pin_count,
            default_center,
            default_zoom: self.default_zoom,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            mapbox_token: String::new(),
            map_style: default_map_style(),
            radius_meters: default_radius_meters(),
            pin_count: default_pin_count(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            default_zoom: default_zoom(),
            simulate_walk: false,
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_map_style() -> String {
    "mapbox://styles/mapbox/streets-v11".to_string()
}

fn default_radius_meters() -> u32 {
    RadiusOption::default().meters()
}

fn default_pin_count() -> usize {
    10
}

fn default_latitude() -> f64 {
    21.122115
}

fn default_longitude() -> f64 {
    -101.683670
}

fn default_zoom() -> f64 {
    13.0
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported radius {0}m (expected one of 500, 1000, 2000, 5000)")]
    UnsupportedRadius(u32),

    #[error("Invalid default center ({latitude}, {longitude})")]
    InvalidDefaultCenter { latitude: f64, longitude: f64 },
}

/// The proximity radii a user can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum RadiusOption {
    Meters500,
    #[default]
    Meters1000,
    Meters2000,
    Meters5000,
}

impl RadiusOption {
    pub const ALL: [RadiusOption; 4] = [
        RadiusOption::Meters500,
        RadiusOption::Meters1000,
        RadiusOption::Meters2000,
        RadiusOption::Meters5000,
    ];

    pub fn meters(self) -> u32 {
        match self {
            RadiusOption::Meters500 => 500,
            RadiusOption::Meters1000 => 1000,
            RadiusOption::Meters2000 => 2000,
            RadiusOption::Meters5000 => 5000,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.meters())
    }
}

impl TryFrom<u32> for RadiusOption {
    type Error = ConfigError;

    fn try_from(meters: u32) -> Result<Self, Self::Error> {
        RadiusOption::ALL
            .into_iter()
            .find(|option| option.meters() == meters)
            .ok_or(ConfigError::UnsupportedRadius(meters))
    }
}

impl From<RadiusOption> for u32 {
    fn from(option: RadiusOption) -> Self {
        option.meters()
    }
}

/// Validated settings shared by the tracker and the HTTP handlers
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub access_token: String,
    pub style: String,
    pub radius: RadiusOption,
    pub pin_count: usize,
    pub default_center: GeoPoint,
    pub default_zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            style: default_map_style(),
            radius: RadiusOption::default(),
            pin_count: default_pin_count(),
            default_center: GeoPoint::new(default_latitude(), default_longitude()),
            default_zoom: default_zoom(),
        }
    }
}
