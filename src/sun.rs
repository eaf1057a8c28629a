//! Sun and golden-hour times on a fixed daily clock.
//!
//! Sunrise, solar transit and sunset are pinned to 07:00, 12:30 and 18:00 in
//! the requested offset. Golden hour is the first hour after sunrise and the
//! last hour before sunset.

use serde::Serialize;
use time::macros::time;
use time::{Date, Duration, OffsetDateTime, PrimitiveDateTime, Time, UtcOffset};

const SUNRISE: Time = time!(7:00);
const TRANSIT: Time = time!(12:30);
const SUNSET: Time = time!(18:00);
const GOLDEN_HOUR: Duration = Duration::HOUR;

/// Sun event timestamps for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunTimes {
    /// Sunrise.
    #[serde(with = "time::serde::rfc3339")]
    pub sunrise: OffsetDateTime,
    /// Solar transit (noon).
    #[serde(with = "time::serde::rfc3339")]
    pub transit: OffsetDateTime,
    /// Sunset.
    #[serde(with = "time::serde::rfc3339")]
    pub sunset: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub golden_hour_morning_start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub golden_hour_morning_end: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub golden_hour_evening_start: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub golden_hour_evening_end: OffsetDateTime,
}

/// Sun times for `date` in `offset`.
pub fn sun_times(date: Date, offset: UtcOffset) -> SunTimes {
    let at = |t: Time| PrimitiveDateTime::new(date, t).assume_offset(offset);

    let sunrise = at(SUNRISE);
    let sunset = at(SUNSET);

    SunTimes {
        sunrise,
        transit: at(TRANSIT),
        sunset,
        golden_hour_morning_start: sunrise,
        golden_hour_morning_end: sunrise + GOLDEN_HOUR,
        golden_hour_evening_start: sunset - GOLDEN_HOUR,
        golden_hour_evening_end: sunset,
    }
}

/// Sun times for the current UTC date.
pub fn sun_times_today() -> SunTimes {
    sun_times(OffsetDateTime::now_utc().date(), UtcOffset::UTC)
}
