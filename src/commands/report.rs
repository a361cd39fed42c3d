//! Weekly report table: one row per project, Mon..Sun + Week + Total.

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};

use crate::aggregation::{week_report, DAY_LABELS};
use crate::render::{Column, Table, BLUE, DIM};
use crate::storage::load_store;
use crate::util::format_duration;


pub fn run(path: &Path) -> Result<()> {
    let store = load_store(path)?;
    let now = Local::now().naive_local();
    let today = now.date();
    let report = week_report(&store, today, now);

    let mut columns = vec![Column::new("Project")];
    let weekday = today.weekday().num_days_from_monday() as usize;
    for (index, label) in DAY_LABELS.iter().enumerate() {
        let mut column = Column::new(label).centered();
        // Highlight today, dim the days still to come
        if index == weekday {
            column = column.styled(BLUE);
        } else if index > weekday {
            column = column.styled(DIM);
        }
        columns.push(column);
    }
    columns.push(Column::new("Week"));
    columns.push(Column::new("Total"));

    let mut table = Table::new(columns);
    for row in &report.rows {
        let mut cells = vec![row.project.clone()];
        for &seconds in &row.per_day {
            cells.push(if seconds > 0 {
                format_duration(seconds)
            } else {
                String::new()
            });
        }
        cells.push(format_duration(row.week_total));
        cells.push(format_duration(row.all_time));
        table.add_row(cells);
    }

    let mut footer = vec!["Total".to_string()];
    for &seconds in &report.day_totals {
        footer.push(format_duration(seconds));
    }
    footer.push(format_duration(report.week_total));
    footer.push(String::new());
    table.set_footer(footer);

    table.print();
    Ok(())
}
