//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use rulesync_core::Vendor;
use std::path::PathBuf;

/// rulesync - synchronize behavioral rules into AI-assistant configurations
#[derive(Parser, Debug)]
#[command(name = "rulesync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate rule configurations for the selected vendor(s)
    Generate {
        /// Input directory containing the rules/ subdirectory
        #[arg(long)]
        input: PathBuf,

        /// Output directory for generated files
        #[arg(long, default_value = ".")]
        output: PathBuf,

        /// Which vendor to generate for
        #[arg(long, value_enum, default_value = "all")]
        vendor: VendorArg,

        /// Show what would be generated without creating files
        #[arg(long)]
        dry_run: bool,

        /// Path to config.yaml (default: {input}/resources/default-config.yaml)
        #[arg(long)]
        config_path: Option<PathBuf>,
    },

    /// Validate all rules and check for conflicts
    Validate {
        /// Input directory containing the rules/ subdirectory
        #[arg(long)]
        input: PathBuf,

        /// Path to config.yaml (default: {input}/resources/default-config.yaml)
        #[arg(long)]
        config_path: Option<PathBuf>,
    },

    /// List all configured rules
    List {
        /// Input directory containing the rules/ subdirectory
        #[arg(long)]
        input: PathBuf,

        /// Path to config.yaml (default: {input}/resources/default-config.yaml)
        #[arg(long)]
        config_path: Option<PathBuf>,
    },
}

/// Vendor selection on the command line; `all` expands to the
/// configuration's default vendor list.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorArg {
    All,
    Cursor,
    Claude,
    Continue,
    Copilot,
    Gemini,
}

impl VendorArg {
    /// The explicit vendor, or `None` for `all`.
    pub fn vendor(&self) -> Option<Vendor> {
        match self {
            VendorArg::All => None,
            VendorArg::Cursor => Some(Vendor::Cursor),
            VendorArg::Claude => Some(Vendor::Claude),
            VendorArg::Continue => Some(Vendor::Continue),
            VendorArg::Copilot => Some(Vendor::Copilot),
            VendorArg::Gemini => Some(Vendor::Gemini),
        }
    }
}
