//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::Subcommand;

use crate::bootstrap::LIFESPAN_ENV;

/// Available commands for the notification engine CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Replay a scenario file against a fresh in-memory vault
    Run {
        /// Path to the scenario JSON file
        scenario: PathBuf,
        /// Override the notification lifespan in seconds
        #[arg(long, env = LIFESPAN_ENV)]
        lifespan: Option<u64>,
        /// Print a single JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one save decision for a form and its candidate logins
    Decide {
        /// Path to the decision input JSON file
        input: PathBuf,
    },
}
