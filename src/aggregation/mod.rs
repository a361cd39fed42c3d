//! Reporting engine: weekly aggregates, session log and calendar grid.

mod calendar;
mod log;
mod weekly;

pub use calendar::{build_grid, CalendarGrid, Cell, DAY_LABELS};
pub use log::{session_log, LogEntry};
pub use weekly::{project_summary, week_report, ProjectSummary, ReportRow, WeekReport};
