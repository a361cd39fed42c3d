//! Per-day and per-week duration aggregation.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::{Project, Store};
use crate::util::is_same_iso_week;


/// Today / this-week / all-time second totals for one project.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectSummary {
    pub today: i64,
    pub week: i64,
    pub total: i64,
}


/// One row of the weekly report table.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub project: String,
    /// Mon..Sun second totals for the current ISO week.
    pub per_day: [i64; 7],
    pub week_total: i64,
    pub all_time: i64,
}


#[derive(Debug, Clone)]
pub struct WeekReport {
    pub rows: Vec<ReportRow>,
    /// Cross-project totals per weekday, for the footer row.
    pub day_totals: [i64; 7],
    pub week_total: i64,
}


pub fn project_summary(project: &Project, today: NaiveDate, now: NaiveDateTime) -> ProjectSummary {
    let mut summary = ProjectSummary::default();
    for session in &project.sessions {
        let duration = session.duration(now);
        summary.total += duration;
        if is_same_iso_week(session.start, today) {
            summary.week += duration;
        }
        if session.start.date() == today {
            summary.today += duration;
        }
    }
    summary
}


/// Partition a project's current-week sessions by weekday (Mon=0..Sun=6).
fn duration_per_day(project: &Project, today: NaiveDate, now: NaiveDateTime) -> [i64; 7] {
    let mut per_day = [0i64; 7];
    for session in &project.sessions {
        if !is_same_iso_week(session.start, today) {
            continue;
        }
        let weekday = session.start.weekday().num_days_from_monday() as usize;
        per_day[weekday] += session.duration(now);
    }
    per_day
}


/// Build the full weekly report, one row per project in store order.
pub fn week_report(store: &Store, today: NaiveDate, now: NaiveDateTime) -> WeekReport {
    let mut rows = Vec::with_capacity(store.projects.len());
    let mut day_totals = [0i64; 7];

    for project in &store.projects {
        let per_day = duration_per_day(project, today, now);
        for (total, day) in day_totals.iter_mut().zip(per_day) {
            *total += day;
        }
        rows.push(ReportRow {
            project: project.name.clone(),
            per_day,
            week_total: per_day.iter().sum(),
            all_time: project.total_duration(now),
        });
    }

    WeekReport {
        rows,
        week_total: day_totals.iter().sum(),
        day_totals,
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use crate::util::format_duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn closed_session(start: &str, end: &str) -> Session {
        let mut session = Session::new(dt(start));
        session.end = Some(dt(end));
        session
    }

    // 2024-01-10 is a Wednesday in ISO week 2024-W02
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_weekly_aggregation_scenario() {
        let mut store = Store::default();
        let mut rng = StdRng::seed_from_u64(7);
        store.add_project("writing", None, &mut rng);

        let project = store.get_project_mut("writing").unwrap();
        // Monday 1h, Wednesday 2h, both in the current week
        project.add_session(closed_session("2024-01-08 09:00:00", "2024-01-08 10:00:00"));
        project.add_session(closed_session("2024-01-10 10:00:00", "2024-01-10 12:00:00"));

        let report = week_report(&store, today(), dt("2024-01-10 18:00:00"));
        let row = &report.rows[0];

        assert_eq!(row.per_day, [3600, 0, 7200, 0, 0, 0, 0]);
        assert_eq!(format_duration(row.per_day[0]), "01:00");
        assert_eq!(format_duration(row.per_day[2]), "02:00");
        assert_eq!(format_duration(row.week_total), "03:00");
        assert_eq!(format_duration(row.all_time), "03:00");
        assert_eq!(report.day_totals, row.per_day);
        assert_eq!(report.week_total, 10800);
    }

    #[test]
    fn test_sessions_outside_the_week_count_only_all_time() {
        let mut store = Store::default();
        let mut rng = StdRng::seed_from_u64(7);
        store.add_project("writing", None, &mut rng);

        let project = store.get_project_mut("writing").unwrap();
        project.add_session(closed_session("2023-12-20 09:00:00", "2023-12-20 10:00:00"));
        project.add_session(closed_session("2024-01-10 10:00:00", "2024-01-10 11:00:00"));

        let report = week_report(&store, today(), dt("2024-01-10 18:00:00"));
        let row = &report.rows[0];

        assert_eq!(row.week_total, 3600);
        assert_eq!(row.all_time, 7200);
    }

    #[test]
    fn test_project_summary_today_week_total() {
        let mut project = crate::models::Project::new("writing", "#f27979".to_string());
        project.add_session(closed_session("2023-12-20 09:00:00", "2023-12-20 10:00:00"));
        project.add_session(closed_session("2024-01-08 09:00:00", "2024-01-08 10:00:00"));
        // Open session started today, running for 30 minutes
        project.add_session(Session::new(dt("2024-01-10 17:30:00")));

        let summary = project_summary(&project, today(), dt("2024-01-10 18:00:00"));
        assert_eq!(summary.today, 1800);
        assert_eq!(summary.week, 3600 + 1800);
        assert_eq!(summary.total, 3600 + 3600 + 1800);
    }

    #[test]
    fn test_cross_project_day_totals() {
        let mut store = Store::default();
        let mut rng = StdRng::seed_from_u64(7);
        store.add_project("a", None, &mut rng);
        store.add_project("b", None, &mut rng);

        store
            .get_project_mut("a")
            .unwrap()
            .add_session(closed_session("2024-01-08 09:00:00", "2024-01-08 10:00:00"));
        store
            .get_project_mut("b")
            .unwrap()
            .add_session(closed_session("2024-01-08 10:00:00", "2024-01-08 10:30:00"));

        let report = week_report(&store, today(), dt("2024-01-10 18:00:00"));
        assert_eq!(report.day_totals[0], 5400);
        assert_eq!(report.week_total, 5400);
    }
}
