//! Configuration management for the workflow validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Log level selection

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments for the workflow validator
#[derive(Debug, Parser)]
#[command(name = "validate-workflows")]
#[command(about = "Validate GitHub Actions workflow files")]
#[command(version)]
pub struct Args {
    /// Print a trace line for every check a file passes
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log level for diagnostics written to stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Workflow files or directories to validate
    #[arg(value_name = "PATH", help = "Workflow file(s) or directory to validate")]
    pub paths: Vec<PathBuf>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether per-check trace lines are printed
    pub verbose: bool,
    /// Log level
    pub log_level: String,
    /// Input paths in command-line order
    pub paths: Vec<PathBuf>,
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_cli() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if args.log_level.trim().is_empty() {
            anyhow::bail!("log level must not be empty");
        }

        Ok(Config {
            verbose: args.verbose,
            log_level: args.log_level,
            paths: args.paths,
        })
    }

    /// True when no input paths were given; the run is a usage error
    pub fn is_usage_error(&self) -> bool {
        self.paths.is_empty()
    }

    /// Usage text printed when no paths are supplied
    pub fn usage() -> String {
        Args::command().render_help().to_string()
    }
}
