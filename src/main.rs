//! makechange - Minimum-coin change from the command line
//!
//! Parses an amount and a denomination set, answers from the persistent change
//! table (or directly from the solver with `--no-cache`), and prints the result.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use makechange::cache::{ArtifactStore, CacheError, CacheManager};
use makechange::change::solve_amount;
use makechange::cli::{render_change, Cli, RunConfig};

/// Sets up stderr logging, honouring `RUST_LOG` over the configured level
fn init_logging(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Picks the store from `--cache-dir` or the platform cache directory
fn open_store(config: &RunConfig) -> Result<ArtifactStore, Box<dyn std::error::Error>> {
    match &config.cache_dir {
        Some(dir) => Ok(ArtifactStore::with_dir(dir.clone())),
        None => ArtifactStore::new()
            .ok_or_else(|| "could not determine a cache directory; pass --cache-dir".into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli)?;
    init_logging(config.log_level);

    let counts = if config.use_cache {
        let mut cache = CacheManager::new(open_store(&config)?);
        if config.clear {
            cache.clear(&config.denominations)?;
        }

        match cache.get(config.amount, &config.denominations) {
            Ok(counts) => counts,
            // The answer is still correct; only the next run loses the cache.
            Err(CacheError::Persistence { counts, source, path }) => {
                eprintln!("warning: could not save cache to {}: {}", path.display(), source);
                counts
            }
            Err(e) => return Err(e.into()),
        }
    } else {
        let amount = u64::try_from(config.amount).map_err(|_| CacheError::InvalidAmount(config.amount))?;
        solve_amount(amount, &config.denominations)?
    };

    println!("{}", render_change(&counts, &config.denominations));
    Ok(())
}
