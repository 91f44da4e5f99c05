//! Command-line front end for the credential-save notification engine.
//!
//! Scenarios describe a vault, its settings and a sequence of browser
//! events; `vault-notify run` replays them against the in-memory adapters
//! and reports what every tab would have been shown.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod scenario;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use scenario::{DecideInput, DecideMode, Scenario, Step};
