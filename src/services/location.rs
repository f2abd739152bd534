use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::libraries::geodesy::destination_point;
use crate::models::{GeoPoint, LocationEvent, LocationFix};

/// Buffered events between a source task and its subscriber
pub const SUBSCRIPTION_CHANNEL_CAPACITY: usize = 16;

/// Anything that can stream positions to a subscriber.
///
/// Each call to `watch_position` starts a fresh stream; implementations
/// spawn onto the current tokio runtime.
#[async_trait]
pub trait LocationSource: Send + Sync {
    fn watch_position(&self) -> LocationSubscription;

    /// One-shot reading: the first event of a fresh stream, which is then
    /// cancelled. `None` if the source ends without producing anything.
    async fn current_position(&self) -> Option<LocationEvent> {
        let mut subscription = self.watch_position();
        let event = subscription.next().await;
        subscription.cancel();
        event
    }
}

/// Receiving end of a location stream
pub struct LocationSubscription {
    receiver: mpsc::Receiver<LocationEvent>,
    cancel: Arc<watch::Sender<bool>>,
}

/// Sending end handed to a source implementation
pub struct LocationPublisher {
    sender: mpsc::Sender<LocationEvent>,
    cancelled: watch::Receiver<bool>,
}

/// Cancels a subscription from outside the task consuming it
#[derive(Clone)]
pub struct CancelHandle {
    cancel: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }
}

impl LocationSubscription {
    /// Create a connected publisher/subscription pair
    pub fn channel() -> (LocationPublisher, LocationSubscription) {
        let (sender, receiver) = mpsc::channel(SUBSCRIPTION_CHANNEL_CAPACITY);
        let (cancel, cancelled) = watch::channel(false);

        (
            LocationPublisher { sender, cancelled },
            LocationSubscription {
                receiver,
                cancel: Arc::new(cancel),
            },
        )
    }

    /// Next event, or `None` once cancelled or when the source is exhausted
    pub async fn next(&mut self) -> Option<LocationEvent> {
        if self.is_cancelled() {
            return None;
        }

        let mut cancelled = self.cancel.subscribe();
        tokio::select! {
            biased;
            _ = wait_cancelled(&mut cancelled) => {
                self.receiver.close();
                None
            }
            event = self.receiver.recv() => event,
        }
    }

    /// Stop the stream; idempotent
    pub fn cancel(&mut self) {
        self.cancel.send_replace(true);
        self.receiver.close();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancel: self.cancel.clone(),
        }
    }
}

impl LocationPublisher {
    /// Deliver an event; `false` means the subscriber is gone
    pub async fn publish(&mut self, event: LocationEvent) -> bool {
        if *self.cancelled.borrow() {
            return false;
        }
        self.sender.send(event).await.is_ok()
    }

    /// Sleep between events; `false` if cancelled meanwhile
    pub async fn pause(&mut self, interval: Duration) -> bool {
        tokio::select! {
            _ = wait_cancelled(&mut self.cancelled) => false,
            _ = self.sender.closed() => false,
            _ = tokio::time::sleep(interval) => true,
        }
    }
}

/// Resolves once the flag is set or its sender is gone
async fn wait_cancelled(cancelled: &mut watch::Receiver<bool>) {
    while !*cancelled.borrow_and_update() {
        if cancelled.changed().await.is_err() {
            return;
        }
    }
}

/// Replays a fixed list of events, from the start on every subscription
#[derive(Debug, Clone)]
pub struct ReplayLocationSource {
    events: Vec<LocationEvent>,
    interval: Option<Duration>,
}

impl ReplayLocationSource {
    pub fn new(events: Vec<LocationEvent>) -> Self {
        Self {
            events,
            interval: None,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }
}

impl LocationSource for ReplayLocationSource {
    fn watch_position(&self) -> LocationSubscription {
        let (mut publisher, subscription) = LocationSubscription::channel();
        let events = self.events.clone();
        let interval = self.interval;

        tokio::spawn(async move {
            for (index, event) in events.into_iter().enumerate() {
                if index > 0 {
                    if let Some(interval) = interval {
                        if !publisher.pause(interval).await {
                            break;
                        }
                    }
                }
                if !publisher.publish(event).await {
                    debug!("Replay subscriber went away after {} events", index);
                    break;
                }
            }
        });

        subscription
    }
}

/// Walks in a straight line from a start point, one fix per tick, until the
/// subscription is cancelled
#[derive(Debug, Clone)]
pub struct SimulatedWalkSource {
    pub start: GeoPoint,
    pub step_meters: f64,
    pub bearing_degrees: f64,
    pub interval: Duration,
    pub accuracy: f64,
}

impl SimulatedWalkSource {
    pub fn new(start: GeoPoint) -> Self {
        Self {
            start,
            step_meters: 25.0,
            bearing_degrees: 45.0,
            interval: Duration::from_secs(2),
            accuracy: 5.0,
        }
    }

    /// Position after `step` ticks
    pub fn position_at(&self, step: u64) -> GeoPoint {
        destination_point(
            &self.start,
            self.step_meters * step as f64,
            self.bearing_degrees,
        )
    }
}

impl LocationSource for SimulatedWalkSource {
    fn watch_position(&self) -> LocationSubscription {
        let (mut publisher, subscription) = LocationSubscription::channel();
        let walk = self.clone();

        tokio::spawn(async move {
            let speed = walk.step_meters / walk.interval.as_secs_f64().max(f64::EPSILON);
            let mut step = 0u64;

            loop {
                let fix = LocationFix::new(walk.position_at(step), walk.accuracy)
                    .with_heading(walk.bearing_degrees, speed);

                if !publisher.publish(LocationEvent::Success(fix)).await {
                    break;
                }
                if !publisher.pause(walk.interval).await {
                    break;
                }
                step += 1;
            }
            debug!("Simulated walk stopped after {} steps", step);
        });

        subscription
    }
}
