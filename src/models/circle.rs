use geo::{LineString, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::location::GeoPoint;

/// A closed ring approximating a circle; the first point is repeated last
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePolygon {
    points: Vec<GeoPoint>,
}

impl CirclePolygon {
    /// Close `vertices` into a ring. An empty input stays empty.
    pub fn from_vertices(mut vertices: Vec<GeoPoint>) -> Self {
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        Self { points: vertices }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self
            .points
            .iter()
            .map(|p| (p.longitude, p.latitude))
            .collect::<Vec<_>>()
            .into();
        Polygon::new(exterior, vec![])
    }

    /// GeoJSON `Feature` with a single-ring `Polygon` and empty properties
    pub fn to_geojson(&self) -> Value {
        let ring: Vec<[f64; 2]> = self.points.iter().map(GeoPoint::to_lng_lat).collect();
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [ring],
            },
            "properties": {},
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> CirclePolygon {
        CirclePolygon::from_vertices(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ])
    }

    #[test]
    fn test_ring_is_closed() {
        let ring = square();
        assert_eq!(ring.len(), 5);
        assert!(ring.is_closed());
        assert_eq!(ring.points()[0], ring.points()[4]);
    }

    #[test]
    fn test_empty_ring() {
        let ring = CirclePolygon::from_vertices(vec![]);
        assert!(ring.is_empty());
        assert!(!ring.is_closed());
    }

    #[test]
    fn test_to_polygon() {
        let polygon = square().to_polygon();
        assert_eq!(polygon.exterior().0.len(), 5);
        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.exterior().0[1].x, 1.0);
    }

    #[test]
    fn test_geojson_shape() {
        let feature = square().to_geojson();
        assert_eq!(feature["type"], "Feature");
        assert_eq!(feature["geometry"]["type"], "Polygon");

        let rings = feature["geometry"]["coordinates"].as_array().unwrap();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].as_array().unwrap().len(), 5);
        assert_eq!(rings[0][1][0], 1.0); // lng first
        assert_eq!(rings[0][1][1], 0.0);
        assert!(feature["properties"].as_object().unwrap().is_empty());
    }
}
