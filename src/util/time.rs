//! Time helpers for durations, week membership and half-hour rounding.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};


/// Format a duration in seconds as HH:MM.
///
/// Hours are not wrapped at 24, so all-time totals stay readable.
pub fn format_duration(seconds: i64) -> String {
    let minutes = seconds / 60;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}


/// Snap a timestamp down to the nearest half-hour boundary.
///
/// Minute < 30 becomes :00, minute >= 30 becomes :30; seconds are dropped.
pub fn round_to_half_hour(dt: NaiveDateTime) -> NaiveDateTime {
    let minute = if dt.minute() < 30 { 0 } else { 30 };
    dt.date()
        .and_hms_opt(dt.hour(), minute, 0)
        .expect("hour/minute are in range")
}


/// Whether a timestamp falls in the same ISO (year, week) as `today`.
pub fn is_same_iso_week(dt: NaiveDateTime, today: NaiveDate) -> bool {
    let week = dt.iso_week();
    let current = today.iso_week();
    week.year() == current.year() && week.week() == current.week()
}


/// Resolve an optional HH:MM override against the current time.
///
/// With an override, the time of day replaces the clock time on today's
/// date. Without one, `now` is truncated to whole minutes.
pub fn resolve_time(now: NaiveDateTime, time: Option<&str>) -> Result<NaiveDateTime> {
    match time {
        Some(spec) => {
            let t = NaiveTime::parse_from_str(spec, "%H:%M")
                .with_context(|| format!("Invalid time \"{spec}\", expected HH:MM"))?;
            Ok(now.date().and_time(t))
        }
        None => Ok(truncate_to_minute(now)),
    }
}


fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date()
        .and_hms_opt(dt.hour(), dt.minute(), 0)
        .expect("hour/minute are in range")
}
