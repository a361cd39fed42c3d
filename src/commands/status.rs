//! Show the active project and its time totals.

use std::path::Path;

use anyhow::Result;
use chrono::Local;

use crate::aggregation::project_summary;
use crate::storage::load_store;
use crate::util::format_duration;


pub fn run(path: &Path) -> Result<()> {
    let store = load_store(path)?;

    if !store.is_active() {
        println!("No active project.");
        println!("Start a session with: \x1b[1mtt start <project>\x1b[0m");
        return Ok(());
    }

    let now = Local::now().naive_local();
    let active = store.get_active()?;
    println!("Active project: \x1b[1m{}\x1b[0m", active.name);

    if let Some(session) = active.active_session() {
        println!(
            "Current session: \x1b[1m{}\x1b[0m started at {}",
            session.duration_str(now),
            session.start.format("%H:%M")
        );
    }

    let summary = project_summary(active, now.date(), now);
    println!("Today: {}", format_duration(summary.today));
    println!("Week: {}", format_duration(summary.week));
    println!("Total: {}", format_duration(summary.total));

    Ok(())
}
