//! Nexus Guard - Entry Point
//!
//! Runs the validation demo scenarios, or screens `<kind> <payload>` lines
//! from stdin.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use tokio::io::BufReader;

use nexus_guard::config::HarnessConfig;
use nexus_guard::harness::{run_demo, screen};
use nexus_guard::utils::logging::setup_logging;

#[derive(Parser, Debug)]
#[command(name = "nexus-guard", version, about = "Validate inputs crossing a trust boundary")]
struct Cli {
    /// Path to a TOML config file (defaults to ./nexus.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Run the configured validation scenarios
    Demo,
    /// Validate `<id|msg|amount> <payload>` lines read from stdin
    /// (kind and payload separated by a space or tab)
    Screen,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    let config = match HarnessConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let stdout = std::io::stdout();
            match run_demo(&config.scenarios, &mut stdout.lock()) {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("Failed to write report: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Screen => {
            info!(
                "Screening stdin (stop on violation: {})",
                config.stop_on_violation
            );
            let stdin = BufReader::new(tokio::io::stdin());
            match screen(stdin, tokio::io::stdout(), config.stop_on_violation).await {
                Ok(summary) if summary.violations > 0 => ExitCode::FAILURE,
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    error!("Screening failed: {}", e);
                    ExitCode::from(2)
                }
            }
        }
    }
}
