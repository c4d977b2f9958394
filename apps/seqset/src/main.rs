//! # seqset
//!
//! The command-line runner for the seqset set registry.
//!
//! ## Usage
//!
//! ```bash
//! # Run a script
//! seqset run -f ops.txt
//!
//! # Interactive session with JSON results
//! seqset --json-mode repl
//!
//! # Show the registry audit trail while running
//! seqset -v run -f ops.txt
//! ```

use clap::Parser;
use seqset::cli::{self, Cli};
use seqset::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "SEQSET_LOG";

/// Environment variable overriding the log format (`text` or `json`).
const LOG_FORMAT_ENV: &str = "SEQSET_LOG_FORMAT";

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    init_tracing(&config, cli.verbose);

    // Display startup banner
    if !cli.quiet && !cli.json_mode && !config.output.json {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli, &config) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. Logs go to stderr so results on stdout stay clean.
fn init_tracing(config: &Config, verbose: bool) {
    let format = match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => LogFormat::Json,
        Ok("text") => LogFormat::Text,
        _ => config.log.format,
    };

    let mut directives = config.log.filter.clone();
    if verbose {
        directives.push_str(",seqset=debug,");
        directives.push_str(seqset_core::primitives::AUDIT_TARGET);
        directives.push_str("=debug");
    }

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the seqset startup banner.
fn print_banner() {
    eprintln!(
        r#"
  seqset v{}

  hash sets of u64 sequences, one hash function per set
"#,
        env!("CARGO_PKG_VERSION")
    );
}
