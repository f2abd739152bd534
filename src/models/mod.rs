pub mod circle;
pub mod location;
pub mod map_view;
pub mod pin;

// Re-export commonly used types
pub use circle::CirclePolygon;
pub use location::{GeoPoint, LocationErrorKind, LocationEvent, LocationFix};
pub use map_view::{MapView, Notification};
pub use pin::{pins_to_geojson, PinInfo, SampledPin};
