use rand::Rng;

use super::{annular_sampler::AnnularPointSampler, circle_polygon::build_circle_polygon};
use crate::config::MapSettings;
use crate::models::{LocationEvent, MapView, Notification};

/// Result of folding one location event into the view
#[derive(Debug, Clone, PartialEq)]
pub struct MapUpdate {
    pub view: MapView,
    pub notification: Option<Notification>,
}

/// Fold a location event into `view`.
///
/// A fix recenters the view and rebuilds the proximity circle and pins. A
/// failure leaves existing overlays alone, parks an uninitialized view at
/// the default center, and yields an error notification.
pub fn apply_location_event<R: Rng>(
    view: MapView,
    event: &LocationEvent,
    settings: &MapSettings,
    sampler: &mut AnnularPointSampler<R>,
) -> MapUpdate {
    match event {
        LocationEvent::Success(fix) => {
            let center = fix.coordinates;
            let radius = settings.radius.as_f64();

            MapUpdate {
                view: MapView {
                    center,
                    zoom: view.zoom,
                    user_marker: Some(center),
                    overlay: Some(build_circle_polygon(&center, radius)),
                    pins: sampler.sample(&center, radius, settings.pin_count),
                    initialized: true,
                },
                notification: None,
            }
        }
        LocationEvent::Failure(kind) => {
            let view = if view.initialized {
                view
            } else {
                MapView {
                    center: settings.default_center,
                    zoom: settings.default_zoom,
                    initialized: true,
                    ..view
                }
            };

            MapUpdate {
                view,
                notification: Some(Notification::error(format!(
                    "Could not get the location: {}",
                    kind
                ))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RadiusOption;
    use crate::libraries::circle_polygon::CIRCLE_VERTEX_COUNT;
    use crate::models::{GeoPoint, LocationErrorKind};
    use rand::{rngs::StdRng, SeedableRng};

    fn sampler() -> AnnularPointSampler<StdRng> {
        AnnularPointSampler::with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_fix_recenters_and_draws() {
        let settings = MapSettings {
            radius: RadiusOption::Meters500,
            pin_count: 6,
            ..Default::default()
        };
        let here = GeoPoint::new(51.505, -0.09);

        let update = apply_location_event(
            MapView::new(&settings),
            &LocationEvent::at(here),
            &settings,
            &mut sampler(),
        );

        assert!(update.notification.is_none());
        let view = update.view;
        assert!(view.initialized);
        assert_eq!(view.center, here);
        assert_eq!(view.user_marker, Some(here));
        assert_eq!(view.overlay.as_ref().unwrap().len(), CIRCLE_VERTEX_COUNT + 1);
        assert_eq!(view.pins.len(), 6);
        for pin in &view.pins {
            let distance = here.distance_to(&pin.position);
            assert!(distance <= 510.0, "pin {}m away", distance);
        }
    }

    #[test]
    fn test_failure_before_fix_falls_back_to_default() {
        let settings = MapSettings::default();
        let mut view = MapView::new(&settings);
        view.center = GeoPoint::new(0.0, 0.0);

        let update = apply_location_event(
            view,
            &LocationEvent::Failure(LocationErrorKind::PermissionDenied),
            &settings,
            &mut sampler(),
        );

        assert!(update.view.initialized);
        assert_eq!(update.view.center, settings.default_center);
        assert_eq!(update.view.zoom, settings.default_zoom);
        assert!(update.view.overlay.is_none());
        assert_eq!(
            update.notification,
            Some(Notification::error(
                "Could not get the location: Permission denied. Please enable location permissions."
            ))
        );
    }

    #[test]
    fn test_failure_after_fix_keeps_view() {
        let settings = MapSettings::default();
        let here = GeoPoint::new(40.7128, -74.0060);
        let mut sampler = sampler();

        let after_fix = apply_location_event(
            MapView::new(&settings),
            &LocationEvent::at(here),
            &settings,
            &mut sampler,
        )
        .view;

        let update = apply_location_event(
            after_fix.clone(),
            &LocationEvent::Failure(LocationErrorKind::Timeout),
            &settings,
            &mut sampler,
        );

        assert_eq!(update.view, after_fix);
        assert!(matches!(update.notification, Some(Notification::Error { .. })));
    }

    #[test]
    fn test_second_fix_replaces_overlay() {
        let settings = MapSettings::default();
        let mut sampler = sampler();
        let first = GeoPoint::new(21.122115, -101.683670);
        let second = GeoPoint::new(21.13, -101.69);

        let view = apply_location_event(
            MapView::new(&settings),
            &LocationEvent::at(first),
            &settings,
            &mut sampler,
        )
        .view;
        let view =
            apply_location_event(view, &LocationEvent::at(second), &settings, &mut sampler).view;

        assert_eq!(view.center, second);
        assert_eq!(
            view.overlay,
            Some(build_circle_polygon(&second, settings.radius.as_f64()))
        );
        assert_eq!(view.pins.len(), settings.pin_count);
    }
}
