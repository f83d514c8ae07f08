//! Timestamp value generators.

use chrono::{DateTime, Utc};
use rand::Rng;

const SECONDS_PER_DAY: i64 = 86_400;

/// Generate a timestamp uniformly distributed over the `days` leading up to `now`.
///
/// Timestamps have whole-second precision.
pub fn recent_timestamp<R: Rng>(rng: &mut R, now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    let window = i64::from(days) * SECONDS_PER_DAY;
    let end = now.timestamp();
    let offset = if window > 0 {
        rng.random_range(0..=window)
    } else {
        0
    };
    DateTime::from_timestamp(end - offset, 0).unwrap_or(now)
}
