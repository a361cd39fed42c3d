//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::default_data_path;


/// ttrack - personal project time tracking
#[derive(Parser)]
#[command(name = "tt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the data file
    #[arg(long, global = true, env = "TTRACK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}


#[derive(Subcommand)]
enum Commands {
    /// Start tracking a project
    Start {
        /// Project to track
        project: String,

        /// Start time as HH:MM (defaults to now)
        #[arg(short, long)]
        time: Option<String>,

        /// Create the project without asking if it doesn't exist
        #[arg(short, long)]
        yes: bool,
    },

    /// Stop the active session
    Stop {
        /// Attach a comment to the closed session
        #[arg(short, long)]
        comment: Option<String>,

        /// End time as HH:MM (defaults to now)
        #[arg(short, long)]
        time: Option<String>,
    },

    /// Show the active project and its time totals
    Status,

    /// Show the weekly report table
    Report,

    /// List sessions, most recent first
    List {
        /// Only show sessions of this project
        project: Option<String>,

        /// Limit the number of sessions shown
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the calendar for the week
    Cal,

    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },
}


#[derive(Subcommand)]
enum ProjectCommands {
    /// Add a new project
    Add { name: String },

    /// Remove a project and all its sessions
    Remove { name: String },

    /// Rename a project
    Rename { old_name: String, new_name: String },

    /// List projects
    List,

    /// Set the color of a project ("random" or "#rrggbb")
    SetColor { name: String, color: String },
}


/// Run the CLI.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(default_data_path);

    match cli.command {
        Commands::Start { project, time, yes } => {
            commands::start::run(&path, &project, time.as_deref(), yes)
        }
        Commands::Stop { comment, time } => commands::stop::run(&path, comment, time.as_deref()),
        Commands::Status => commands::status::run(&path),
        Commands::Report => commands::report::run(&path),
        Commands::List { project, limit } => {
            commands::list::run(&path, project.as_deref(), limit)
        }
        Commands::Cal => commands::cal::run(&path),
        Commands::Project { command } => match command {
            ProjectCommands::Add { name } => commands::project::add(&path, &name),
            ProjectCommands::Remove { name } => commands::project::remove(&path, &name),
            ProjectCommands::Rename { old_name, new_name } => {
                commands::project::rename(&path, &old_name, &new_name)
            }
            ProjectCommands::List => commands::project::list(&path),
            ProjectCommands::SetColor { name, color } => {
                commands::project::set_color(&path, &name, &color)
            }
        },
    }
}
