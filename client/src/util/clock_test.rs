use time::macros::datetime;

use super::*;

#[test]
fn from_millis_keeps_sub_second_precision() {
    assert_eq!(from_millis(1_500.0), datetime!(1970-01-01 00:00:01.5 UTC));
}

#[test]
fn from_millis_drops_fraction_of_a_millisecond() {
    assert_eq!(from_millis(2_000.9), datetime!(1970-01-01 00:00:02 UTC));
}

#[test]
fn format_date_is_short_month_day_year() {
    assert_eq!(format_date(datetime!(2025-06-05 23:59 UTC)), "Jun 5, 2025");
}

#[test]
fn format_date_uses_utc() {
    assert_eq!(format_date(datetime!(2025-06-05 23:30 -02:00)), "Jun 6, 2025");
}

#[test]
fn format_time_is_24_hour() {
    assert_eq!(format_time(datetime!(2025-06-05 09:07 UTC)), "09:07");
}

#[test]
fn now_is_after_epoch() {
    assert!(now() > OffsetDateTime::UNIX_EPOCH);
    assert!(seed() > 0);
}
