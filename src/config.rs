//! Configuration management for the sudoku grid checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input source selection

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Command-line arguments for the grid checker
#[derive(Debug, Parser)]
#[command(name = "sudoku-check")]
#[command(about = "Validate a completed 9x9 Sudoku grid")]
#[command(version)]
pub struct Args {
    /// Path to the puzzle file; standard input is read when omitted
    pub input: Option<PathBuf>,

    /// Print the full diagnostic report as JSON instead of the bare 1/0
    #[arg(long)]
    pub json: bool,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Puzzle file to read; `None` means standard input
    pub input: Option<PathBuf>,
    /// Emit a JSON report instead of the bare result value
    pub json: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            input: args.input,
            json: args.json,
            log_level: args.log_level,
        })
    }
}
