//! Configuration module for marquee
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every option has a built-in default, so the program also runs with
//! no configuration file at all.
//!
//! # Example
//!
//! ```no_run
//! use marquee::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Shared pool cap: {}", config.pools.max_shared_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, PoolConfig, SourceConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
