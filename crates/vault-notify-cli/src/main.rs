//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers; scenario commands go through
//! bootstrap so handlers only ever see a composed `CliContext`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vault_notify_cli::{
    Cli, CliConfig, CliError, Commands, DecideInput, Scenario, bootstrap, handlers,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run {
            scenario,
            lifespan,
            json,
        } => {
            let scenario = Scenario::from_path(&scenario)?;
            let config = CliConfig {
                lifespan_secs: lifespan,
            };
            let ctx = bootstrap(&config, &scenario)?;
            handlers::run::execute(&ctx, &scenario.steps, json).await?;
        }
        Commands::Decide { input } => {
            let input = DecideInput::from_path(&input)?;
            handlers::decide::execute(&input)?;
        }
    }

    Ok(())
}
