//! Stop the active session.

use std::path::Path;

use anyhow::{bail, Result};
use chrono::Local;

use crate::storage::{load_store, save_store};
use crate::util::{format_duration, resolve_time};


pub fn run(path: &Path, comment: Option<String>, time: Option<&str>) -> Result<()> {
    let mut store = load_store(path)?;

    let at = resolve_time(Local::now().naive_local(), time)?;

    // The end must not precede the session's start
    if let Some(session) = store.get_active().ok().and_then(|p| p.active_session()) {
        if at < session.start {
            bail!(
                "End time {} is before the session start {}",
                at.format("%H:%M"),
                session.start.format("%H:%M")
            );
        }
    }

    let closed = store.stop_session(at, comment)?;
    save_store(&store, path)?;

    println!(
        "Session {} stopped (Duration: {})",
        closed.project,
        format_duration(closed.duration)
    );
    Ok(())
}
