//! Shared-memory worker pool
//!
//! One task per link on the shared runtime, all cloning a single HTTP
//! client, with concurrency bounded by a semaphore. Connection reuse across
//! workers falls out of the shared client's pool.

use crate::exec::{scrape_detail, WorkerPool};
use crate::scrape::{MovieLink, MovieRecord};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Bounded pool of concurrent tasks sharing one connection context
pub struct SharedPool {
    client: Client,
    max_workers: usize,
}

impl SharedPool {
    /// Creates a shared pool over an existing client
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client; cloned into every task
    /// * `max_workers` - Cap on concurrently running tasks
    pub fn new(client: Client, max_workers: usize) -> Self {
        Self {
            client,
            max_workers,
        }
    }
}

#[async_trait]
impl WorkerPool for SharedPool {
    fn label(&self) -> &'static str {
        "shared"
    }

    async fn run(&self, links: Vec<MovieLink>) -> Vec<MovieRecord> {
        let semaphore = Arc::new(Semaphore::new(self.max_workers.max(1)));
        let mut tasks = JoinSet::new();

        for link in links {
            let client = self.client.clone();
            let semaphore = semaphore.clone();
            tasks.spawn(async move {
                // Holds the permit for the task's whole fetch+extract span
                let _permit = semaphore.acquire_owned().await.ok()?;
                scrape_detail(&client, &link).await
            });
        }

        let mut records = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {}
                Err(err) => tracing::error!("shared pool task failed: {}", err),
            }
        }

        records
    }
}
