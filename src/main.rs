//! Marquee main entry point
//!
//! Command-line interface for the movie chart scraper and worker-pool
//! benchmark.

use anyhow::Result;
use clap::Parser;
use marquee::config::{load_config_with_hash, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Marquee: a movie chart scraper and worker-pool benchmark
///
/// Marquee scrapes a ranked movie chart into a CSV file twice, once with a
/// shared-connection worker pool and once with fully isolated workers, and
/// reports the wall-clock time of each pass.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(version = "1.0.0")]
#[command(about = "A movie chart scraper and worker-pool benchmark", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the effective settings without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    marquee::bench::compare(config).await?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("marquee=info,warn"),
            1 => EnvFilter::new("marquee=debug,info"),
            2 => EnvFilter::new("marquee=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the effective settings
fn handle_dry_run(config: &Config) {
    println!("=== Marquee Dry Run ===\n");

    println!("Pools:");
    println!("  Max shared workers: {}", config.pools.max_shared_workers);
    println!(
        "  Max isolated workers: {}",
        config.pools.max_isolated_workers
    );

    println!("\nSource:");
    println!("  Index URL: {}", config.source.index_url);
    println!("  Base origin: {}", config.source.base_origin);
    println!("  User agent: {}", config.source.user_agent);

    println!("\nOutput:");
    println!("  CSV file: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}
