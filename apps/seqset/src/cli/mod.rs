//! # seqset CLI Module
//!
//! This module implements the CLI interface for seqset.
//!
//! ## Available Commands
//!
//! - `run` - Execute a script file against a fresh registry
//! - `repl` - Read commands from stdin, one result per line
//! - `hashes` - List the built-in hash function providers

mod commands;

use crate::config::Config;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// seqset - registry of hash sets over u64 sequences
///
/// Every set is bound to its own hash function and addressed by a numeric id.
#[derive(Parser, Debug)]
#[command(name = "seqset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (includes the registry audit trail)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file (default: ./seqset.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Hash function used by `create` lines that name none
    #[arg(long, global = true)]
    pub hash: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a script file
    Run {
        /// Path to the script
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Read commands interactively from stdin
    Repl,

    /// List built-in hash functions
    Hashes,
}

/// Effective settings after merging config and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub json: bool,
    pub default_hash: String,
}

impl Settings {
    /// Flags win over the config file.
    #[must_use]
    pub fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            json: cli.json_mode || config.output.json,
            default_hash: cli
                .hash
                .clone()
                .unwrap_or_else(|| config.registry.default_hash.clone()),
        }
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli, config: &Config) -> Result<(), AppError> {
    let settings = Settings::merge(&cli, config);

    match cli.command {
        Some(Commands::Run { file }) => cmd_run(&file, &settings),
        Some(Commands::Repl) => cmd_repl(&settings),
        Some(Commands::Hashes) => cmd_hashes(settings.json),
        None => {
            // No subcommand - fall back to the REPL
            cmd_repl(&settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["seqset", "--json-mode", "--hash", "sum", "hashes"]);
        let settings = Settings::merge(&cli, &Config::default());
        assert!(settings.json);
        assert_eq!(settings.default_hash, "sum");
    }

    #[test]
    fn config_applies_without_flags() {
        let cli = Cli::parse_from(["seqset", "run", "-f", "script.txt"]);
        let mut config = Config::default();
        config.output.json = true;
        config.registry.default_hash = "blake3".to_string();

        let settings = Settings::merge(&cli, &config);
        assert!(settings.json);
        assert_eq!(settings.default_hash, "blake3");
        assert!(matches!(cli.command, Some(Commands::Run { .. })));
    }
}
