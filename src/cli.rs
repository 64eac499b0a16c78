//! Command-line interface parsing for makechange
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `RunConfig`, plus formatting of the result for the terminal.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::change::{DenominationError, Denominations};

/// Default denominations when none are given: US coins
pub const DEFAULT_DENOMINATIONS: &str = "1,5,10,25";

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The denomination list is malformed
    #[error("Invalid denominations '{input}': {source}")]
    InvalidDenominations {
        input: String,
        #[source]
        source: DenominationError,
    },
}

/// makechange - Make change with as few coins as the greedy rule allows
#[derive(Parser, Debug)]
#[command(name = "makechange")]
#[command(about = "Minimum-coin change with a persistent cache")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Amount of change to make, in the smallest unit
    pub amount: i64,

    /// Comma-separated denominations, smallest first
    ///
    /// Examples:
    ///   makechange 41                          # US coins
    ///   makechange 4683 -d 1,5,10,25,100,500   # coins and bills
    #[arg(short, long, value_name = "LIST", default_value = DEFAULT_DENOMINATIONS)]
    pub denominations: String,

    /// Solve directly without reading or writing the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Delete the cached table for these denominations before solving
    #[arg(long)]
    pub clear: bool,

    /// Directory for cached tables (defaults to the platform cache directory)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Requested amount, not yet checked for sign
    pub amount: i64,
    /// Validated denomination set
    pub denominations: Denominations,
    /// Whether to go through the cache
    pub use_cache: bool,
    /// Whether to clear the artifact first
    pub clear: bool,
    /// Cache directory override
    pub cache_dir: Option<PathBuf>,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: &'static str,
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(RunConfig)` with validated denominations
    /// * `Err(CliError)` if the denomination list is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let denominations = cli.denominations.parse::<Denominations>().map_err(|source| {
            CliError::InvalidDenominations {
                input: cli.denominations.clone(),
                source,
            }
        })?;

        Ok(RunConfig {
            amount: cli.amount,
            denominations,
            use_cache: !cli.no_cache,
            clear: cli.clear,
            cache_dir: cli.cache_dir.clone(),
            log_level: if cli.verbose { "debug" } else { "warn" },
        })
    }
}

/// Formats counts as the raw list, a line per used denomination, and a total
///
/// Denominations are listed largest first and unused ones are skipped.
pub fn render_change(counts: &[u64], denominations: &Denominations) -> String {
    let mut lines = vec![format!("{:?}", counts)];

    for (count, value) in counts.iter().zip(denominations.values()).rev() {
        if *count > 0 {
            lines.push(format!("{} x {}", count, value));
        }
    }

    let total: u64 = counts.iter().sum();
    lines.push(format!("total coins: {}", total));
    lines.join("\n")
}
