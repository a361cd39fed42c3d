//! List sessions, most recent first.

use std::path::Path;

use anyhow::Result;
use chrono::Local;

use crate::aggregation::session_log;
use crate::render::{Column, Table};
use crate::storage::load_store;
use crate::util::format_duration;


pub fn run(path: &Path, project_name: Option<&str>, limit: Option<usize>) -> Result<()> {
    let store = load_store(path)?;
    let now = Local::now().naive_local();
    let entries = session_log(&store, project_name, limit, now);

    let mut table = Table::new(vec![
        Column::new("Project"),
        Column::new("Date"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Duration"),
        Column::new("Comment"),
    ]);

    for entry in &entries {
        // Open sessions show the current time as their end
        let end = entry.end.unwrap_or(now);
        table.add_row(vec![
            entry.project.clone(),
            entry.start.format("%Y-%m-%d").to_string(),
            entry.start.format("%H:%M").to_string(),
            end.format("%H:%M").to_string(),
            format_duration(entry.duration),
            entry.comment.clone().unwrap_or_default(),
        ]);
    }

    table.print();
    Ok(())
}
