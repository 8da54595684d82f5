//! Marquee: a movie chart scraper and worker-pool benchmark
//!
//! This crate fetches a ranked movie chart, scrapes each movie's detail page
//! for a fixed set of fields, and appends the complete records to a CSV file.
//! The same workload is executed twice, once on a shared-connection worker
//! pool and once on fully isolated workers, and the wall-clock time of each
//! pass is reported.

pub mod bench;
pub mod config;
pub mod exec;
pub mod scrape;
pub mod sink;

use thiserror::Error;

/// Main error type for marquee operations
///
/// Per-page fetch and extraction failures never surface here; they are
/// absorbed at the worker boundary as "no record". What remains is the
/// startup and shutdown surface: configuration, client construction, and
/// writing the output file.
#[derive(Debug, Error)]
pub enum MarqueeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sink error: {0}")]
    Sink(#[from] sink::SinkError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for marquee operations
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scrape::{MovieLink, MovieRecord};
