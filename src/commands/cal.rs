//! Weekly calendar grid view.

use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::Local;

use crate::aggregation::build_grid;
use crate::render::print_calendar;
use crate::storage::load_store;


pub fn run(path: &Path) -> Result<()> {
    let store = load_store(path)?;
    let now = Local::now().naive_local();

    let grid = build_grid(&store, now.date(), now)
        .ok_or_else(|| anyhow!("no sessions found for this week"))?;

    print_calendar(&grid);
    Ok(())
}
