pub mod location;
pub mod map_surface;
pub mod notification;
pub mod tracker;

pub use location::{
    CancelHandle, LocationPublisher, LocationSource, LocationSubscription, ReplayLocationSource,
    SimulatedWalkSource,
};
pub use map_surface::{render, InMemoryMapSurface, MapSurface, CIRCLE_OVERLAY_ID};
pub use notification::{NotificationLog, NotificationSurface, TracingNotifier};
pub use tracker::{ProximityTracker, TrackerError};
