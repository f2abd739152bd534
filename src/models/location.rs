use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point from latitude and longitude
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Create a point from a GeoJSON-ordered `[lng, lat]` pair
    pub fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Validate that coordinates are within valid GPS ranges
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0 && self.latitude <= 90.0 &&
        self.longitude >= -180.0 && self.longitude <= 180.0
    }

    /// GeoJSON position order
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Great-circle distance to another point in meters
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::libraries::geodesy::distance_meters(self, other)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        GeoPoint::from_lng_lat(point.x(), point.y())
    }
}

/// A single successful position reading from a location source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coordinates: GeoPoint,
    pub accuracy: f64,       // Horizontal accuracy in meters
    pub timestamp: i64,      // Unix timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,     // Altitude in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude_accuracy: Option<f64>, // Vertical accuracy in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,      // Direction in degrees from north
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,        // Speed in meters/second
}

impl LocationFix {
    /// Create a fix with minimal required fields, stamped now
    pub fn new(coordinates: GeoPoint, accuracy: f64) -> Self {
        Self {
            coordinates,
            accuracy,
            timestamp: Utc::now().timestamp(),
            altitude: None,
            altitude_accuracy: None,
            heading: None,
            speed: None,
        }
    }

    pub fn with_heading(mut self, heading: f64, speed: f64) -> Self {
        self.heading = Some(heading);
        self.speed = Some(speed);
        self
    }
}

/// Why a location source could not produce a position.
///
/// Codes follow the W3C Geolocation `PositionError` numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LocationErrorKind {
    #[error("Permission denied. Please enable location permissions.")]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("The request to get the location timed out.")]
    Timeout,

    #[error("Unknown error while getting the location{}", unknown_detail(.0))]
    Unknown(String),
}

fn unknown_detail(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {}", detail)
    }
}

impl LocationErrorKind {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    /// Map a platform error code and message onto a kind
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            Self::PERMISSION_DENIED => LocationErrorKind::PermissionDenied,
            Self::POSITION_UNAVAILABLE => LocationErrorKind::PositionUnavailable,
            Self::TIMEOUT => LocationErrorKind::Timeout,
            _ => LocationErrorKind::Unknown(message.into()),
        }
    }
}

/// One item of a location stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum LocationEvent {
    Success(LocationFix),
    Failure(LocationErrorKind),
}

impl LocationEvent {
    pub fn at(coordinates: GeoPoint) -> Self {
        LocationEvent::Success(LocationFix::new(coordinates, 0.0))
    }

    pub fn position(&self) -> Option<&GeoPoint> {
        match self {
            LocationEvent::Success(fix) => Some(&fix.coordinates),
            LocationEvent::Failure(_) => None,
        }
    }
}

impl From<Result<LocationFix, LocationErrorKind>> for LocationEvent {
    fn from(result: Result<LocationFix, LocationErrorKind>) -> Self {
        match result {
            Ok(fix) => LocationEvent::Success(fix),
            Err(kind) => LocationEvent::Failure(kind),
        }
    }
}
