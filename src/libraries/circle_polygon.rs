use std::f64::consts::PI;

use crate::models::{CirclePolygon, GeoPoint};

/// WGS-84 semi-major axis in meters
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Distinct vertices in a circle ring (the ring itself has one more)
pub const CIRCLE_VERTEX_COUNT: usize = 64;

/// Build a closed ring approximating a circle of `radius_meters` around
/// `center`.
///
/// The offset is converted from meters to degrees with the same factor on
/// both axes; longitude is not scaled by `cos(latitude)`, so the ring is an
/// ellipse on the ground away from the equator. Rings that would cross the
/// date line or a pole are not wrapped.
pub fn build_circle_polygon(center: &GeoPoint, radius_meters: f64) -> CirclePolygon {
    let degrees = (radius_meters / EARTH_RADIUS_METERS) * (180.0 / PI);

    let vertices = (0..CIRCLE_VERTEX_COUNT)
        .map(|i| {
            let angle = (i as f64 / CIRCLE_VERTEX_COUNT as f64) * 2.0 * PI;
            GeoPoint::from_lng_lat(
                center.longitude + degrees * angle.cos(),
                center.latitude + degrees * angle.sin(),
            )
        })
        .collect();

    CirclePolygon::from_vertices(vertices)
}
