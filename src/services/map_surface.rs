use std::collections::BTreeMap;
use tracing::debug;

use crate::models::{CirclePolygon, GeoPoint, MapView, SampledPin};

/// Overlay id the proximity circle is drawn under
pub const CIRCLE_OVERLAY_ID: &str = "circle";

/// The map widget the view is rendered onto
pub trait MapSurface {
    fn set_center(&mut self, center: &GeoPoint, zoom: f64);

    fn set_user_marker(&mut self, point: &GeoPoint);

    fn has_overlay(&self, id: &str) -> bool;

    fn add_overlay(&mut self, id: &str, ring: &CirclePolygon);

    fn remove_overlay(&mut self, id: &str);

    /// Replace any overlay registered under `id`
    fn set_overlay_polygon(&mut self, id: &str, ring: &CirclePolygon) {
        if self.has_overlay(id) {
            self.remove_overlay(id);
        }
        self.add_overlay(id, ring);
    }

    fn clear_markers(&mut self);

    /// Place a tappable marker; activation is routed back by marker index
    fn place_marker(&mut self, pin: &SampledPin);
}

/// Push the whole view onto a surface
pub fn render<S: MapSurface + ?Sized>(surface: &mut S, view: &MapView) {
    surface.set_center(&view.center, view.zoom);

    if let Some(marker) = &view.user_marker {
        surface.set_user_marker(marker);
    }

    if let Some(ring) = &view.overlay {
        surface.set_overlay_polygon(CIRCLE_OVERLAY_ID, ring);
    }

    surface.clear_markers();
    for pin in &view.pins {
        surface.place_marker(pin);
    }
}

/// Surface that keeps what was drawn in memory and traces each call
#[derive(Debug, Default)]
pub struct InMemoryMapSurface {
    pub center: Option<GeoPoint>,
    pub zoom: Option<f64>,
    pub user_marker: Option<GeoPoint>,
    pub overlays: BTreeMap<String, CirclePolygon>,
    pub markers: Vec<SampledPin>,
    pub overlay_removals: usize,
}

impl MapSurface for InMemoryMapSurface {
    fn set_center(&mut self, center: &GeoPoint, zoom: f64) {
        debug!("Map centered at ({}, {}) zoom {}", center.latitude, center.longitude, zoom);
        self.center = Some(*center);
        self.zoom = Some(zoom);
    }

    fn set_user_marker(&mut self, point: &GeoPoint) {
        self.user_marker = Some(*point);
    }

    fn has_overlay(&self, id: &str) -> bool {
        self.overlays.contains_key(id)
    }

    fn add_overlay(&mut self, id: &str, ring: &CirclePolygon) {
        debug!("Adding overlay '{}' with {} points", id, ring.len());
        self.overlays.insert(id.to_string(), ring.clone());
    }

    fn remove_overlay(&mut self, id: &str) {
        if self.overlays.remove(id).is_some() {
            self.overlay_removals += 1;
        }
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn place_marker(&mut self, pin: &SampledPin) {
        self.markers.push(pin.clone());
    }
}
