//! Float-seconds to `Duration` conversion.

use std::time::Duration;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Convert fractional seconds (as found in config files) to a `Duration`.
///
/// The result is truncated to whole nanoseconds. Negative and NaN inputs
/// give `Duration::ZERO`; values past `u64::MAX` nanoseconds saturate.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use peerwire::util::seconds_to_duration;
///
/// assert_eq!(seconds_to_duration(2.5), Duration::from_millis(2500));
/// ```
#[inline]
pub fn seconds_to_duration(seconds: f64) -> Duration {
    // Float-to-int `as` casts saturate and map NaN to 0.
    Duration::from_nanos((seconds * NANOS_PER_SEC) as u64)
}
