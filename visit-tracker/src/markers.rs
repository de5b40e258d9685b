//! Random map markers, one per recorded visit.

use chrono::{DateTime, Utc};
use rand::Rng;
use visit_tracker_types::LocationMarker;

/// Latitudes stay inside ±70° to keep pins off the poles.
pub const MAX_ABS_LAT: f64 = 70.0;
pub const MAX_ABS_LNG: f64 = 170.0;

/// Marker for the visit that brought the counter to `count`.
pub fn generate_marker(count: i64) -> LocationMarker {
    new_marker(&mut rand::thread_rng(), count, Utc::now())
}

pub fn new_marker<R: Rng + ?Sized>(rng: &mut R, count: i64, now: DateTime<Utc>) -> LocationMarker {
    let lat = rng.gen_range(-MAX_ABS_LAT..=MAX_ABS_LAT);
    let lng = rng.gen_range(-MAX_ABS_LNG..=MAX_ABS_LNG);
    LocationMarker {
        lat: round4(lat),
        lng: round4(lng),
        ts: format_timestamp(now),
        note: format!("Visit #{}", count),
    }
}

/// ISO-8601 with microseconds and a literal `Z`, e.g. `2025-01-02T03:04:05.000006Z`.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
