use rand::{rngs::ThreadRng, Rng};
use tracing::{debug, info, warn};

use super::location::LocationSubscription;
use super::map_surface::{render, MapSurface};
use super::notification::NotificationSurface;
use crate::config::MapSettings;
use crate::libraries::{apply_location_event, AnnularPointSampler};
use crate::models::{LocationEvent, MapView, Notification};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("No pin at index {0}")]
    NoSuchPin(usize),
}

/// Drives a map view from a location stream.
///
/// The tracker owns the only mutable `MapView`; every event is folded in
/// through `apply_location_event` and the result rendered before the next
/// event is read.
pub struct ProximityTracker<M, N, R = ThreadRng> {
    view: MapView,
    settings: MapSettings,
    surface: M,
    notifier: N,
    sampler: AnnularPointSampler<R>,
}

impl<M: MapSurface, N: NotificationSurface> ProximityTracker<M, N, ThreadRng> {
    pub fn new(settings: MapSettings, surface: M, notifier: N) -> Self {
        Self::with_sampler(settings, surface, notifier, AnnularPointSampler::new())
    }
}

impl<M: MapSurface, N: NotificationSurface, R: Rng> ProximityTracker<M, N, R> {
    pub fn with_sampler(
        settings: MapSettings,
        mut surface: M,
        notifier: N,
        sampler: AnnularPointSampler<R>,
    ) -> Self {
        let view = MapView::new(&settings);
        render(&mut surface, &view);

        Self {
            view,
            settings,
            surface,
            notifier,
            sampler,
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fold one event into the view and push the result out
    pub fn handle_event(&mut self, event: &LocationEvent) {
        let current = std::mem::replace(&mut self.view, MapView::new(&self.settings));
        let update = apply_location_event(current, event, &self.settings, &mut self.sampler);
        self.view = update.view;

        match event {
            LocationEvent::Success(fix) => debug!(
                "Fix at ({:.6}, {:.6}) ±{:.1}m, {} pins",
                fix.coordinates.latitude,
                fix.coordinates.longitude,
                fix.accuracy,
                self.view.pins.len()
            ),
            LocationEvent::Failure(kind) => warn!("Location unavailable: {}", kind),
        }

        render(&mut self.surface, &self.view);

        if let Some(notification) = update.notification {
            self.notifier.show(&notification);
        }
    }

    /// Consume events until the subscription ends or is cancelled
    pub async fn run(&mut self, mut subscription: LocationSubscription) -> &MapView {
        info!("Starting proximity tracker");

        let mut processed = 0usize;
        while let Some(event) = subscription.next().await {
            self.handle_event(&event);
            processed += 1;
        }

        info!("Proximity tracker stopped after {} events", processed);
        &self.view
    }

    /// Show the details for the pin at `index` of the current view
    pub fn activate_pin(&mut self, index: usize) -> Result<(), TrackerError> {
        let pin = self
            .view
            .pins
            .get(index)
            .ok_or(TrackerError::NoSuchPin(index))?;

        self.notifier.show(&Notification::for_pin(&pin.info));
        Ok(())
    }

    pub fn into_parts(self) -> (MapView, M, N) {
        (self.view, self.surface, self.notifier)
    }
}
