//! # acme-cli: Basket Calculator
//!
//! Command-line front end for acme-core.
//!
//! ## Module Organization
//! ```text
//! acme_cli/
//! ├── lib.rs          ◄─── You are here (argument parsing, logging, dispatch)
//! ├── config.rs       ◄─── Pricing config loading (file or built-in)
//! ├── commands/
//! │   ├── demo.rs     ◄─── Reference baskets
//! │   ├── total.rs    ◄─── Ad-hoc basket pricing
//! │   └── catalog.rs  ◄─── Product listing
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! ## Usage
//! ```bash
//! basket demo
//! basket total R01 R01 G01
//! basket total R01 R01 --format json
//! basket --config ./pricing.json catalog
//! ```

pub mod commands;
pub mod config;
pub mod error;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::total::OutputFormat;
use config::CONFIG_ENV_VAR;
use error::CliResult;

/// Acme Widget Co basket calculator.
#[derive(Debug, Parser)]
#[command(name = "basket", version, about)]
pub struct Cli {
    /// Pricing config (JSON). Defaults to the built-in Acme Widget Co prices.
    #[arg(long, global = true, env = CONFIG_ENV_VAR, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Price the four reference baskets
    Demo,

    /// Price a basket of product codes
    Total {
        /// Product codes, one per unit (repeat a code to add it again)
        codes: Vec<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List products and offers
    Catalog,
}

/// Parses arguments and runs the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Runs an already-parsed command against `out`.
pub fn execute(cli: Cli, out: &mut dyn Write) -> CliResult<()> {
    let rules = config::load_rules(cli.config.as_deref())?;
    info!(command = ?cli.command, "Running command");

    match cli.command {
        Commands::Demo => commands::demo::run_demo(&rules, out),
        Commands::Total { codes, format } => commands::total::run_total(&rules, &codes, format, out),
        Commands::Catalog => commands::catalog::run_catalog(&rules, out),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `--verbose` - Debug for the acme crates only
/// - Default: WARN
///
/// Logs go to stderr; stdout carries only command output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,acme_core=debug,acme_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_total() {
        let cli = Cli::parse_from(["basket", "total", "R01", "G01", "--format", "json"]);
        match cli.command {
            Commands::Total { codes, format } => {
                assert_eq!(codes, ["R01", "G01"]);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_execute_total() {
        let cli = Cli::parse_from(["basket", "total", "R01", "G01"]);
        let mut out = Vec::<u8>::new();
        execute(Cli { config: None, ..cli }, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.lines().last().unwrap().ends_with("$60.85"));
    }
}
