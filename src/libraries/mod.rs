pub mod annular_sampler;
pub mod circle_polygon;
pub mod geodesy;
pub mod map_update;
pub mod pin_filter;
pub mod place_catalog;

pub use annular_sampler::{sample_pins, AnnularPointSampler};
pub use circle_polygon::build_circle_polygon;
pub use map_update::{apply_location_event, MapUpdate};
pub use pin_filter::PinFilter;
