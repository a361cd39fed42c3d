//! Start tracking a project.

use std::path::Path;

use anyhow::{bail, Result};
use chrono::Local;
use rand::thread_rng;

use crate::commands::confirm;
use crate::models::StoreError;
use crate::storage::{load_store, save_store};
use crate::util::resolve_time;


pub fn run(path: &Path, project_name: &str, time: Option<&str>, yes: bool) -> Result<()> {
    let mut store = load_store(path)?;

    if let Some(active) = &store.active_project {
        println!("Use \x1b[1mtt stop\x1b[0m to stop the current session first.");
        bail!(StoreError::AlreadyActive(active.clone()));
    }

    if !store.has_project(project_name) {
        println!("Project \"{project_name}\" doesn't exist.");
        if yes || confirm("Do you want to create it?")? {
            store.add_project(project_name, None, &mut thread_rng());
        } else {
            println!("\x1b[33mCancelled\x1b[0m");
            return Ok(());
        }
    }

    let at = resolve_time(Local::now().naive_local(), time)?;
    store.start_session(project_name, at)?;
    save_store(&store, path)?;

    println!("\x1b[32m{project_name} is now active.\x1b[0m");
    Ok(())
}
