use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

use geomaps::config::{MapSettings, RadiusOption};
use geomaps::libraries::AnnularPointSampler;
use geomaps::models::{GeoPoint, LocationErrorKind, LocationEvent, Notification};
use geomaps::services::{
    InMemoryMapSurface, LocationSource, NotificationLog, ProximityTracker, ReplayLocationSource,
    SimulatedWalkSource, CIRCLE_OVERLAY_ID,
};

fn tracker(settings: MapSettings) -> ProximityTracker<InMemoryMapSurface, NotificationLog, StdRng> {
    ProximityTracker::with_sampler(
        settings,
        InMemoryMapSurface::default(),
        NotificationLog::default(),
        AnnularPointSampler::with_rng(StdRng::seed_from_u64(2024)),
    )
}

#[tokio::test]
async fn test_tracker_follows_replayed_route() {
    let start = GeoPoint::new(21.122115, -101.683670);
    let end = GeoPoint::new(21.125, -101.680);
    let source = ReplayLocationSource::new(vec![
        LocationEvent::at(start),
        LocationEvent::Failure(LocationErrorKind::PositionUnavailable),
        LocationEvent::at(end),
    ]);

    let settings = MapSettings {
        radius: RadiusOption::Meters2000,
        pin_count: 12,
        ..Default::default()
    };
    let mut tracker = tracker(settings);
    let view = tracker.run(source.watch_position()).await.clone();

    assert!(view.initialized);
    assert_eq!(view.center, end);
    assert_eq!(view.user_marker, Some(end));
    assert_eq!(view.pins.len(), 12);

    let (_, surface, notifications) = tracker.into_parts();
    assert_eq!(surface.overlays.len(), 1);
    // Every render after the first fix replaces the circle in place
    assert_eq!(surface.overlay_removals, 2);
    assert_eq!(surface.overlays[CIRCLE_OVERLAY_ID], view.overlay.unwrap());
    assert_eq!(surface.markers, view.pins);

    assert_eq!(notifications.shown.len(), 1);
    assert_eq!(
        notifications.shown[0],
        Notification::error("Could not get the location: Location information is unavailable.")
    );
}

#[tokio::test]
async fn test_permission_denied_falls_back_to_default_center() {
    let source = ReplayLocationSource::new(vec![LocationEvent::Failure(
        LocationErrorKind::from_code(1, "User denied Geolocation"),
    )]);

    let settings = MapSettings::default();
    let mut tracker = tracker(settings.clone());
    let view = tracker.run(source.watch_position()).await.clone();

    assert!(view.initialized);
    assert_eq!(view.center, settings.default_center);
    assert!(view.overlay.is_none());
    assert!(view.pins.is_empty());
    assert!(matches!(
        &tracker.notifier().shown[..],
        [Notification::Error { message, .. }] if message.contains("Permission denied")
    ));
}

#[tokio::test]
async fn test_cancelling_stops_tracker() {
    let source = SimulatedWalkSource {
        interval: Duration::from_millis(5),
        ..SimulatedWalkSource::new(GeoPoint::new(21.122115, -101.683670))
    };
    let subscription = source.watch_position();
    let handle = subscription.cancel_handle();

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(60)).await;
        handle.cancel();
    });

    let mut tracker = tracker(MapSettings::default());
    let view = tokio::time::timeout(Duration::from_secs(5), tracker.run(subscription))
        .await
        .expect("tracker should stop once cancelled")
        .clone();

    assert!(view.initialized);
    assert_eq!(view.pins.len(), 10);
    assert!(tracker.notifier().shown.is_empty());
}

#[tokio::test]
async fn test_pin_activation_after_run() {
    let here = GeoPoint::new(40.7128, -74.0060);
    let source = ReplayLocationSource::new(vec![LocationEvent::at(here)])
        .with_interval(Duration::from_millis(1));

    let mut tracker = tracker(MapSettings::default());
    tracker.run(source.watch_position()).await;

    let pin = tracker.view().pins[3].clone();
    tracker.activate_pin(3).unwrap();

    match &tracker.notifier().shown[..] {
        [Notification::Info { title, fields }] => {
            assert_eq!(title, &pin.info.name);
            assert!(fields
                .iter()
                .any(|(label, value)| label == "Phone" && value == &pin.info.phone));
        }
        other => panic!("unexpected notifications: {:?}", other),
    }
}
