//! Time conversions for SIMU-CIC files
//!
//! Header timestamps are parsed as naive calendar times. Data rows carry a
//! Modified Julian Day and a seconds-of-day pair, which is converted to a
//! UTC-anchored instant. The two results are deliberately different types:
//! callers comparing them must anchor the naive value themselves.

use crate::constants::{
    ALTERNATE_TIMESTAMP_FORMAT, CALENDAR_TIMESTAMP_FORMAT, MJD_EPOCH_DAY, MJD_EPOCH_MONTH,
    MJD_EPOCH_YEAR, NANOS_PER_SECOND, SECONDS_PER_DAY,
};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Parse a header timestamp (`YYYY-MM-DDTHH:MM:SS.mmm`)
pub fn parse_calendar_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, CALENDAR_TIMESTAMP_FORMAT).map_err(|e| {
        Error::datetime_parsing(
            format!(
                "Invalid timestamp '{}' (expected 'YYYY-MM-DDTHH:MM:SS.mmm')",
                text
            ),
            e,
        )
    })
}

/// Parse a simulation-info timestamp (`YYYY/MM/DD HH:MM:SS.mmm`)
pub fn parse_alternate_calendar_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, ALTERNATE_TIMESTAMP_FORMAT).map_err(|e| {
        Error::datetime_parsing(
            format!(
                "Invalid timestamp '{}' (expected 'YYYY/MM/DD HH:MM:SS.mmm')",
                text
            ),
            e,
        )
    })
}

/// MJD epoch, 1858-11-17T00:00:00 UTC
pub fn mjd_epoch() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(MJD_EPOCH_YEAR, MJD_EPOCH_MONTH, MJD_EPOCH_DAY)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Convert a (possibly fractional) Modified Julian Day to a UTC instant
pub fn mjd_to_absolute_time(days: f64) -> Result<DateTime<Utc>> {
    if !days.is_finite() {
        return Err(Error::format(format!("Invalid MJD day count: {}", days)));
    }

    let whole_days = days.trunc();
    let whole = TimeDelta::try_days(whole_days as i64)
        .ok_or_else(|| Error::format(format!("MJD day count out of range: {}", days)))?;
    let fraction = seconds_to_offset((days - whole_days) * SECONDS_PER_DAY)?;

    mjd_epoch()
        .checked_add_signed(whole)
        .and_then(|instant| instant.checked_add_signed(fraction))
        .ok_or_else(|| Error::format(format!("MJD day count out of range: {}", days)))
}

/// Convert a number of seconds to a duration, rounded to the nanosecond
pub fn seconds_to_offset(seconds: f64) -> Result<TimeDelta> {
    if !seconds.is_finite() {
        return Err(Error::format(format!("Invalid seconds value: {}", seconds)));
    }

    let whole_seconds = seconds.trunc();
    let nanos = ((seconds - whole_seconds) * NANOS_PER_SECOND).round() as i64;

    TimeDelta::try_seconds(whole_seconds as i64)
        .map(|whole| whole + TimeDelta::nanoseconds(nanos))
        .ok_or_else(|| Error::format(format!("Seconds value out of range: {}", seconds)))
}

/// Timestamp of a data row: MJD day plus seconds of day, UTC-anchored
pub fn row_timestamp(days: f64, seconds: f64) -> Result<DateTime<Utc>> {
    let day_start = mjd_to_absolute_time(days)?;
    let offset = seconds_to_offset(seconds)?;

    day_start
        .checked_add_signed(offset)
        .ok_or_else(|| Error::format(format!("Row time out of range: {} {}", days, seconds)))
}

/// Split a UTC instant into (whole MJD day, seconds of day)
pub fn absolute_time_to_mjd(instant: DateTime<Utc>) -> (f64, f64) {
    let elapsed = instant.signed_duration_since(mjd_epoch());
    let days = elapsed.num_days();
    let remainder = elapsed - TimeDelta::days(days);

    let mut seconds = remainder.num_seconds() as f64;
    seconds += remainder.subsec_nanos() as f64 / NANOS_PER_SECOND;

    // Instants before the epoch leave a negative remainder
    if seconds < 0.0 {
        return ((days - 1) as f64, seconds + SECONDS_PER_DAY);
    }
    (days as f64, seconds)
}
