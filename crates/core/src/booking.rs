//! Booking-interval arithmetic.
//!
//! All booking intervals are half-open `[start, end)`: a booking ending at
//! instant T does not conflict with one starting at T.

use crate::error::CoreError;
use crate::types::Timestamp;

const SECS_PER_DAY: i64 = 86_400;

/// Validate a booking interval. Both endpoints are required by the
/// deserializer; this enforces that the interval is non-degenerate.
pub fn validate_interval(start: Timestamp, end: Timestamp) -> Result<(), CoreError> {
    if start >= end {
        return Err(CoreError::Validation(
            "start_time must be strictly before end_time".into(),
        ));
    }
    Ok(())
}

/// Half-open overlap test: `[a, b)` and `[c, d)` overlap iff `a < d && c < b`.
pub fn intervals_overlap(a: Timestamp, b: Timestamp, c: Timestamp, d: Timestamp) -> bool {
    a < d && c < b
}

/// Number of billable days in `[start, end)`, rounded up to whole days.
///
/// A stay shorter than 24 hours still counts as one day.
pub fn total_days(start: Timestamp, end: Timestamp) -> i32 {
    let secs = (end - start).num_seconds().max(0);
    ((secs + SECS_PER_DAY - 1) / SECS_PER_DAY) as i32
}
