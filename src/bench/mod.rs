//! Benchmark driver
//!
//! Collects the chart links once, then runs the shared and the isolated
//! pool sequentially over the same link set, appending each pass's records
//! to the output file and reporting its wall-clock time. Both passes write
//! to the same store, so one run appends up to two rows per movie that
//! extracts successfully both times.

use crate::config::Config;
use crate::exec::{IsolatedPool, SharedPool, WorkerPool};
use crate::scrape::{build_http_client, collect_links, MovieLink};
use crate::sink;
use crate::Result;
use std::path::Path;
use std::time::{Duration, Instant};

/// Runs the full benchmark: collect, then time both pools
///
/// An empty link set (index unreachable, non-200, or no chart on the page)
/// is a terminal condition for the run, reported to the user and returned
/// as success.
///
/// # Arguments
///
/// * `config` - The benchmark configuration
///
/// # Returns
///
/// * `Ok(())` - Benchmark completed (or halted on an empty link set)
/// * `Err(MarqueeError)` - Client construction or sink writing failed
pub async fn compare(config: Config) -> Result<()> {
    let client = build_http_client(&config.source)?;

    let links = collect_links(&client, &config.source).await;
    if links.is_empty() {
        println!("No movie links found.");
        return Ok(());
    }

    println!("Extracting {} movies...", links.len());

    let shared = SharedPool::new(client.clone(), config.pools.max_shared_workers);
    let elapsed = run_pass(&shared, links.clone(), &config).await?;
    println!("Shared pool time: {:.2} seconds", elapsed.as_secs_f64());

    let isolated = IsolatedPool::new(config.source.clone(), config.pools.max_isolated_workers);
    let elapsed = run_pass(&isolated, links, &config).await?;
    println!("Isolated pool time: {:.2} seconds", elapsed.as_secs_f64());

    Ok(())
}

/// Times one pool end-to-end, sink append included
async fn run_pass<P: WorkerPool>(
    pool: &P,
    links: Vec<MovieLink>,
    config: &Config,
) -> Result<Duration> {
    let start = Instant::now();

    let records = pool.run(links).await;
    tracing::info!(
        "{} pool extracted {} of its links",
        pool.label(),
        records.len()
    );

    sink::append(Path::new(&config.output.csv_path), &records)?;

    Ok(start.elapsed())
}

// End-to-end behavior is covered by the wiremock integration tests.
