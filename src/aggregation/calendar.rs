//! Weekly calendar grid construction.
//!
//! Sessions from the current week are snapped to half-hour boundaries,
//! bucketed by weekday with the date stripped, and laid out on a shared
//! time axis spanning the earliest start to the latest end of the week.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::Store;
use crate::util::{is_same_iso_week, round_to_half_hour};


pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];


/// A session's half-hour-aligned slice of one weekday, time-of-day only.
#[derive(Debug, Clone)]
struct DayRange {
    start: NaiveTime,
    end: NaiveTime,
    project: String,
    color: String,
    comment: Option<String>,
}


/// One cell of the grid. `color` is set when a range covers the interval;
/// `label` only on the range's first interval, so a multi-interval session
/// reads as one block.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub color: Option<String>,
    pub label: Option<String>,
}


#[derive(Debug, Clone)]
pub struct CalendarGrid {
    /// Consecutive half-hour intervals forming the vertical axis.
    pub intervals: Vec<(NaiveTime, NaiveTime)>,
    /// One row per interval, one cell per weekday.
    pub rows: Vec<[Cell; 7]>,
}


/// Build the weekly grid, or `None` when no session falls in this week.
pub fn build_grid(store: &Store, today: NaiveDate, now: NaiveDateTime) -> Option<CalendarGrid> {
    let buckets = sessions_per_day(store, today, now);
    let (earliest, latest) = time_axis(&buckets)?;
    let intervals = half_hour_intervals(earliest, latest);

    let mut rows = Vec::with_capacity(intervals.len());
    for &(start, end) in &intervals {
        let mut row: [Cell; 7] = Default::default();
        for (day, bucket) in buckets.iter().enumerate() {
            // Last matching range wins; overlaps are not arbitrated
            for range in bucket {
                if range.start <= start && range.end >= end {
                    let label = (range.start == start).then(|| match &range.comment {
                        Some(comment) => format!("{} ({})", range.project, comment),
                        None => range.project.clone(),
                    });
                    row[day] = Cell {
                        color: Some(range.color.clone()),
                        label,
                    };
                }
            }
        }
        rows.push(row);
    }

    Some(CalendarGrid { intervals, rows })
}


/// Round and bucket this week's sessions by the weekday of their start.
fn sessions_per_day(store: &Store, today: NaiveDate, now: NaiveDateTime) -> [Vec<DayRange>; 7] {
    let mut buckets: [Vec<DayRange>; 7] = Default::default();

    for project in &store.projects {
        for session in &project.sessions {
            if !is_same_iso_week(session.start, today) {
                continue;
            }
            let weekday = session.start.weekday().num_days_from_monday() as usize;
            buckets[weekday].push(DayRange {
                start: round_to_half_hour(session.start).time(),
                end: round_to_half_hour(session.end.unwrap_or(now)).time(),
                project: project.name.clone(),
                color: project.color.clone(),
                comment: session.comment.clone(),
            });
        }
    }

    buckets
}


/// Earliest start and latest end across all buckets combined.
fn time_axis(buckets: &[Vec<DayRange>; 7]) -> Option<(NaiveTime, NaiveTime)> {
    let mut earliest: Option<NaiveTime> = None;
    let mut latest: Option<NaiveTime> = None;

    for bucket in buckets {
        for range in bucket {
            earliest = Some(earliest.map_or(range.start, |e| e.min(range.start)));
            latest = Some(latest.map_or(range.end, |l| l.max(range.end)));
        }
    }

    earliest.zip(latest)
}


fn half_hour_intervals(earliest: NaiveTime, latest: NaiveTime) -> Vec<(NaiveTime, NaiveTime)> {
    let count = (latest - earliest).num_minutes() / 30;
    (0..count)
        .map(|i| {
            let start = earliest + Duration::minutes(30 * i);
            (start, start + Duration::minutes(30))
        })
        .collect()
}
