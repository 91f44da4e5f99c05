//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the credential-save notification engine.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "vault-notify")]
#[command(about = "Replay credential-save notification scenarios")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        // Verify the CLI parser can be constructed
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_args() {
        let cli = Cli::parse_from([
            "vault-notify",
            "--verbose",
            "run",
            "scenario.json",
            "--lifespan",
            "30",
            "--json",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Run {
                scenario,
                lifespan,
                json,
            }) => {
                assert_eq!(scenario.to_str(), Some("scenario.json"));
                assert_eq!(lifespan, Some(30));
                assert!(json);
            }
            _ => panic!("expected run command"),
        }
    }
}
