//! Timestamps stored as .NET ticks, such as the play date in replays and in `scores.db`.
//!
//! A tick is 100 nanoseconds, counted from 0001-01-01 00:00:00 UTC.

use chrono::{DateTime, Utc};

/// The number of ticks in a second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// The number of ticks from 0001-01-01 to the Unix epoch.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Converts .NET ticks to a date. `None` for negative ticks.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use osu_rs::time::ticks_to_datetime;
///
/// assert_eq!(
///     ticks_to_datetime(638_000_000_000_000_000),
///     Some(Utc.with_ymd_and_hms(2022, 9, 28, 22, 13, 20).unwrap()),
/// );
/// ```
#[must_use]
pub fn ticks_to_datetime(ticks: i64) -> Option<DateTime<Utc>> {
    if ticks < 0 {
        return None;
    }
    let since_epoch = ticks - UNIX_EPOCH_TICKS;
    let secs = since_epoch.div_euclid(TICKS_PER_SECOND);
    let nanos = since_epoch.rem_euclid(TICKS_PER_SECOND) * 100;
    DateTime::from_timestamp(secs, u32::try_from(nanos).ok()?)
}

/// Converts a date to .NET ticks. `None` if the date is before year 1 or too far in the future.
#[must_use]
pub fn datetime_to_ticks(datetime: DateTime<Utc>) -> Option<i64> {
    let ticks = datetime
        .timestamp()
        .checked_mul(TICKS_PER_SECOND)?
        .checked_add(i64::from(datetime.timestamp_subsec_nanos() / 100))?
        .checked_add(UNIX_EPOCH_TICKS)?;
    (ticks >= 0).then_some(ticks)
}
