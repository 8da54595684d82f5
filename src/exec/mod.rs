//! Parallel execution of the fetch-extract pipeline
//!
//! This module runs the per-movie pipeline over a set of detail links under
//! two interchangeable dispatch strategies:
//! - [`SharedPool`]: bounded concurrent tasks sharing one HTTP client
//! - [`IsolatedPool`]: bounded isolated workers, one private HTTP client each
//!
//! The pipeline itself ([`scrape_detail`]) exists once; the strategies differ
//! only in how workers are dispatched and what they share.

mod isolated;
mod shared;

pub use isolated::IsolatedPool;
pub use shared::SharedPool;

use crate::scrape::{extract_record, fetch_page, FetchError, MovieLink, MovieRecord};
use async_trait::async_trait;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;

/// Upper bound (exclusive) of the random pre-fetch delay, in milliseconds.
/// Spreads request bursts; not a coordinated rate limiter.
const JITTER_CEILING_MS: u64 = 200;

/// A bounded pool that runs the pipeline over a set of detail links
///
/// Implementations must tolerate per-link failures: a link that cannot be
/// fetched or extracted yields no record and never aborts the rest of the
/// pool. The returned records are in task-completion order, which need not
/// match the input order.
#[async_trait]
pub trait WorkerPool {
    /// Short human-readable name used in reports
    fn label(&self) -> &'static str;

    /// Runs the pipeline over all links and returns the successful records
    async fn run(&self, links: Vec<MovieLink>) -> Vec<MovieRecord>;
}

/// Fetches and extracts one detail page
///
/// Sleeps a random jitter first, then fetch and extract. Every failure mode
/// converges to `None` here; nothing propagates to the pool.
pub(crate) async fn scrape_detail(client: &Client, link: &MovieLink) -> Option<MovieRecord> {
    let jitter = rand::thread_rng().gen_range(0..JITTER_CEILING_MS);
    tokio::time::sleep(Duration::from_millis(jitter)).await;

    let body = match fetch_page(client, link.as_str()).await {
        Ok(body) => body,
        Err(FetchError::NonSuccessStatus(status)) => {
            tracing::debug!("skipping {}: HTTP {}", link, status);
            return None;
        }
        Err(FetchError::Transport(err)) => {
            tracing::warn!("failed to fetch {}: {}", link, err);
            return None;
        }
    };

    extract_record(&body)
}

/// Splits links round-robin into at most `worker_count` partitions
///
/// Partitions are as even as possible and preserve relative order within
/// each partition. Never returns empty partitions.
pub(crate) fn partition(links: Vec<MovieLink>, worker_count: usize) -> Vec<Vec<MovieLink>> {
    if links.is_empty() {
        return Vec::new();
    }

    let buckets = worker_count.max(1).min(links.len());
    let mut partitions = vec![Vec::new(); buckets];
    for (index, link) in links.into_iter().enumerate() {
        partitions[index % buckets].push(link);
    }
    partitions
}
