//! ttrack CLI - personal project time tracking.
//!
//! Records work sessions per project in a local JSON file and renders
//! status, weekly report, session list and calendar views.

mod aggregation;
mod cli;
mod commands;
mod config;
mod models;
mod render;
mod storage;
mod util;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
