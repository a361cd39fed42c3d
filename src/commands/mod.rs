//! CLI command implementations.

pub mod cal;
pub mod list;
pub mod project;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;

use std::io::{self, Write};

use anyhow::Result;


/// Ask a yes/no question, reading the answer from stdin.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/n]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
