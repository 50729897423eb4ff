//! rulesync CLI
//!
//! Synchronizes a source-of-truth set of behavioral-rule documents into
//! vendor-specific AI-assistant configuration layouts.

mod cli;
mod commands;
mod error;
mod logging;
mod report;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            input,
            output,
            vendor,
            dry_run,
            config_path,
        } => commands::run_generate(
            &input,
            &output,
            vendor.vendor(),
            dry_run,
            config_path.as_deref(),
        ),
        Commands::Validate { input, config_path } => {
            commands::run_validate(&input, config_path.as_deref())
        }
        Commands::List { input, config_path } => {
            commands::run_list(&input, config_path.as_deref())
        }
    }
}
