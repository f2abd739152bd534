use geo::{HaversineDestination, HaversineDistance, Point};

use crate::models::GeoPoint;

/// Distance between two points in meters using the Haversine formula
pub fn distance_meters(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let p1: Point<f64> = (*from).into();
    let p2: Point<f64> = (*to).into();

    p1.haversine_distance(&p2)
}

/// Point reached by travelling `distance_meters` from `origin` along
/// `bearing_degrees` (clockwise from north) on a great circle
pub fn destination_point(
    origin: &GeoPoint,
    distance_meters: f64,
    bearing_degrees: f64,
) -> GeoPoint {
    let start: Point<f64> = (*origin).into();
    let destination = start.haversine_destination(bearing_degrees, distance_meters);

    // Keep longitude in [-180, 180) across the antimeridian
    let longitude = (destination.x() + 540.0).rem_euclid(360.0) - 180.0;

    GeoPoint::new(destination.y(), longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_calculation() {
        // San Francisco to Palo Alto (approximately 48km)
        let sf = GeoPoint::new(37.7749, -122.4194);
        let palo_alto = GeoPoint::new(37.4419, -122.1430);
        let distance = distance_meters(&sf, &palo_alto);
        assert!((distance - 48_000.0).abs() < 5_000.0);

        // ~100m north
        let north = GeoPoint::new(37.7758, -122.4194);
        let distance = distance_meters(&sf, &north);
        assert!((distance - 100.0).abs() < 20.0);
    }

    #[test]
    fn test_destination_round_trips_distance() {
        let origin = GeoPoint::new(21.122115, -101.683670);

        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0] {
            let moved = destination_point(&origin, 250.0, bearing);
            let distance = distance_meters(&origin, &moved);
            assert!(
                (distance - 250.0).abs() < 1.0,
                "bearing {} moved {}m",
                bearing,
                distance
            );
        }
    }

    #[test]
    fn test_destination_known_offset() {
        let origin = GeoPoint::new(21.122115, -101.683670);
        let moved = destination_point(&origin, 250.0, 45.0);

        assert!((moved.longitude - -101.681965689).abs() < 1e-8);
        assert!((moved.latitude - 21.123704780).abs() < 1e-8);
    }

    #[test]
    fn test_destination_direction() {
        let origin = GeoPoint::new(0.0, 0.0);

        let north = destination_point(&origin, 1000.0, 0.0);
        assert!(north.latitude > 0.0);
        assert!(north.longitude.abs() < 1e-9);

        let east = destination_point(&origin, 1000.0, 90.0);
        assert!(east.longitude > 0.0);
        assert!(east.latitude.abs() < 1e-9);
    }

    #[test]
    fn test_destination_wraps_date_line() {
        let origin = GeoPoint::new(0.0, 179.999);
        let moved = destination_point(&origin, 1000.0, 90.0);
        assert!(moved.is_valid());
        assert!(moved.longitude < 0.0);
    }
}
