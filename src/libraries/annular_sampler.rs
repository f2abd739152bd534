use rand::{rngs::ThreadRng, Rng};
use std::f64::consts::PI;

use super::place_catalog::random_place;
use crate::models::{GeoPoint, SampledPin};

/// Meters per degree of latitude used to turn offsets into degrees
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

/// Inner boundary of the annulus as a fraction of the radius
pub const INNER_RADIUS_RATIO: f64 = 0.1;

/// Scatters demonstration pins inside the annulus between 10% and 100% of a
/// circle's radius.
///
/// Points that land outside valid coordinate ranges are dropped rather than
/// redrawn, so a call may return fewer pins than requested.
pub struct AnnularPointSampler<R = ThreadRng> {
    rng: R,
}

impl AnnularPointSampler<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for AnnularPointSampler<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AnnularPointSampler<R> {
    /// Sample from a caller-supplied generator (seed it for reproducible output)
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate up to `count` pins around `center`, in generation order
    pub fn sample(
        &mut self,
        center: &GeoPoint,
        radius_meters: f64,
        count: usize,
    ) -> Vec<SampledPin> {
        let mut pins = Vec::with_capacity(count);

        for _ in 0..count {
            let angle = self.rng.gen_range(0.0..2.0 * PI);
            let distance = self.random_distance(radius_meters);
            let info = random_place(&mut self.rng);

            let position = offset_point(center, distance, angle);
            if position.is_valid() {
                pins.push(SampledPin::new(position, info));
            }
        }

        pins
    }

    fn random_distance(&mut self, radius_meters: f64) -> f64 {
        if !(radius_meters.is_finite() && radius_meters > 0.0) {
            return 0.0;
        }
        self.rng.gen_range(INNER_RADIUS_RATIO * radius_meters..=radius_meters)
    }
}

/// Sample with the thread-local generator
pub fn sample_pins(center: &GeoPoint, radius_meters: f64, count: usize) -> Vec<SampledPin> {
    AnnularPointSampler::new().sample(center, radius_meters, count)
}

/// Move `distance` meters from `center` at `angle` radians; the cosine of the
/// angle drives latitude and longitude is corrected for the center latitude
pub fn offset_point(center: &GeoPoint, distance: f64, angle: f64) -> GeoPoint {
    let lat_offset = distance * angle.cos() / METERS_PER_DEGREE_LATITUDE;
    let lng_offset = distance * angle.sin()
        / (METERS_PER_DEGREE_LATITUDE * (center.latitude * PI / 180.0).cos());

    GeoPoint::new(center.latitude + lat_offset, center.longitude + lng_offset)
}
