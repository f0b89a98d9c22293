//! Date display for epoch-millisecond timestamps.

use chrono::{Datelike, Local, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format `millis` in local time as `15 Jan 2017` or `15 Jan 2017 at 09:05:03`.
///
/// Returns `None` when the timestamp is outside the representable range.
#[must_use]
pub fn format_timestamp(millis: i64, include_time: bool) -> Option<String> {
    format_timestamp_in(millis, include_time, &Local)
}

/// [`format_timestamp`] in an explicit time zone.
///
/// The day of month is not padded; hours, minutes and seconds always have
/// two digits.
#[must_use]
pub fn format_timestamp_in<Tz: TimeZone>(
    millis: i64,
    include_time: bool,
    tz: &Tz,
) -> Option<String> {
    let date = tz.timestamp_millis_opt(millis).single()?;
    let month = MONTHS[date.month0() as usize];
    let day = format!("{} {month} {}", date.day(), date.year());
    if !include_time {
        return Some(day);
    }
    Some(format!(
        "{day} at {:02}:{:02}:{:02}",
        date.hour(),
        date.minute(),
        date.second()
    ))
}
