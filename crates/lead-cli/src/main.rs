//! # lead CLI entry point
//!
//! Operator tooling for the spreadsheet sink. Both subcommands read their
//! configuration from the same environment variables as the server, so a
//! successful `check-access` here means the server will start cleanly.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lead_sheets::{SheetsClient, SheetsConfig};

/// Lead capture operator CLI.
///
/// Prepares and verifies the spreadsheet the submission service appends to.
#[derive(Parser, Debug)]
#[command(name = "lead", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the German column header row into the configured sheet.
    SetupSheet,

    /// Verify the configured credentials can reach the spreadsheet.
    CheckAccess,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let config = SheetsConfig::from_env()?;
    let client = SheetsClient::new(config)?;

    match command {
        Commands::SetupSheet => {
            client.write_headers().await?;
            println!("Header row written.");
        }
        Commands::CheckAccess => {
            let title = client.check_access().await?;
            println!("Access OK: {title}");
        }
    }
    Ok(())
}
