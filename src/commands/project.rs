//! Project lifecycle management subcommands.

use std::path::Path;

use anyhow::{bail, Result};
use rand::thread_rng;

use crate::commands::confirm;
use crate::models::StoreError;
use crate::storage::{load_store, save_store};
use crate::util::{parse_hex, random_color};


pub fn add(path: &Path, name: &str) -> Result<()> {
    let mut store = load_store(path)?;

    if store.has_project(name) {
        bail!(StoreError::ProjectExists(name.to_string()));
    }

    store.add_project(name, None, &mut thread_rng());
    save_store(&store, path)?;

    println!("Project \"{name}\" added.");
    Ok(())
}


pub fn remove(path: &Path, name: &str) -> Result<()> {
    let mut store = load_store(path)?;

    let session_count = store.get_project(name)?.session_count();
    let confirmed = confirm(&format!(
        "Are you sure you want to remove the project \"{name}\" and delete {session_count} sessions?"
    ))?;

    if !confirmed {
        println!("\x1b[33mCancelled\x1b[0m");
        return Ok(());
    }

    store.remove_project(name);
    save_store(&store, path)?;

    println!("Project \"{name}\" has been removed.");
    Ok(())
}


pub fn rename(path: &Path, old_name: &str, new_name: &str) -> Result<()> {
    let mut store = load_store(path)?;

    store.rename_project(old_name, new_name)?;
    save_store(&store, path)?;

    println!("Project \"{old_name}\" has been renamed to \"{new_name}\".");
    Ok(())
}


pub fn list(path: &Path) -> Result<()> {
    let store = load_store(path)?;

    if store.projects.is_empty() {
        println!("No projects. Add one with: \x1b[1mtt project add <name>\x1b[0m");
        return Ok(());
    }

    for project in &store.projects {
        let (r, g, b) = parse_hex(&project.color)?;
        println!("\x1b[38;2;{r};{g};{b}m⬤\x1b[0m {}", project.name);
    }
    Ok(())
}


pub fn set_color(path: &Path, name: &str, color: &str) -> Result<()> {
    let mut store = load_store(path)?;

    if !store.has_project(name) {
        bail!(StoreError::ProjectNotFound(name.to_string()));
    }

    let color = if color == "random" {
        random_color(&mut thread_rng())
    } else {
        // Validate before touching the store
        parse_hex(color)?;
        color.to_lowercase()
    };

    let (r, g, b) = parse_hex(&color)?;
    store.get_project_mut(name)?.color = color.clone();
    save_store(&store, path)?;

    println!(
        "Color for project \"{name}\" has been set to \x1b[38;2;{r};{g};{b}m{color}\x1b[0m"
    );
    Ok(())
}
