//! Wall-clock access and date labels.
//!
//! `time`'s own `now_utc` is not usable in the browser bundle, so the hydrate
//! build reads `Date.now()` instead. Everything downstream takes the value as
//! an argument.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Current UTC time.
#[must_use]
pub fn now() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        from_millis(js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Seed for per-view random generators.
#[must_use]
pub fn seed() -> u64 {
    u64::try_from(now().unix_timestamp_nanos() / 1_000).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation)]
fn from_millis(millis: f64) -> OffsetDateTime {
    let nanos = i128::from(millis.trunc() as i64) * 1_000_000;
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// `Jun 15, 2025`.
#[must_use]
pub fn format_date(at: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    at.to_offset(UtcOffset::UTC).format(&format).unwrap_or_default()
}

/// `14:05`.
#[must_use]
pub fn format_time(at: OffsetDateTime) -> String {
    let format = format_description!("[hour]:[minute]");
    at.to_offset(UtcOffset::UTC).format(&format).unwrap_or_default()
}
