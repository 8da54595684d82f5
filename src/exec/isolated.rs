//! Isolated worker pool
//!
//! One dedicated OS thread per worker, each with its own single-threaded
//! runtime and its own freshly built HTTP client. Workers share no queue and
//! no connection context; links are partitioned up front. The extra startup
//! cost per worker is part of what the benchmark measures.

use crate::config::SourceConfig;
use crate::exec::{partition, scrape_detail, WorkerPool};
use crate::scrape::{build_http_client, MovieLink, MovieRecord};
use async_trait::async_trait;

/// Bounded pool of isolated workers, one private connection context each
pub struct IsolatedPool {
    source: SourceConfig,
    max_workers: usize,
}

impl IsolatedPool {
    /// Creates an isolated pool
    ///
    /// # Arguments
    ///
    /// * `source` - Source configuration; each worker builds its own client
    ///   from it
    /// * `max_workers` - Cap on concurrently active workers
    pub fn new(source: SourceConfig, max_workers: usize) -> Self {
        Self {
            source,
            max_workers,
        }
    }
}

#[async_trait]
impl WorkerPool for IsolatedPool {
    fn label(&self) -> &'static str {
        "isolated"
    }

    async fn run(&self, links: Vec<MovieLink>) -> Vec<MovieRecord> {
        let partitions = partition(links, self.max_workers);
        if partitions.is_empty() {
            return Vec::new();
        }

        let source = self.source.clone();
        let joined = tokio::task::spawn_blocking(move || {
            let handles: Vec<_> = partitions
                .into_iter()
                .map(|batch| {
                    let source = source.clone();
                    std::thread::spawn(move || worker_main(&source, &batch))
                })
                .collect();

            let mut records = Vec::new();
            for handle in handles {
                match handle.join() {
                    Ok(batch) => records.extend(batch),
                    Err(_) => tracing::error!("isolated worker thread panicked"),
                }
            }
            records
        })
        .await;

        match joined {
            Ok(records) => records,
            Err(err) => {
                tracing::error!("isolated pool join failed: {}", err);
                Vec::new()
            }
        }
    }
}

/// Body of one isolated worker
///
/// Builds the worker's private runtime and client, then drains its partition
/// sequentially. Setup failures lose only this worker's partition.
fn worker_main(source: &SourceConfig, batch: &[MovieLink]) -> Vec<MovieRecord> {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!("failed to start isolated worker runtime: {}", err);
            return Vec::new();
        }
    };

    let client = match build_http_client(source) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("failed to build isolated worker client: {}", err);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for link in batch {
        if let Some(record) = runtime.block_on(scrape_detail(&client, link)) {
            records.push(record);
        }
    }
    records
}
