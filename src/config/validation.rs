use crate::config::types::{Config, OutputConfig, PoolConfig, SourceConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_pool_config(&config.pools)?;
    validate_source_config(&config.source)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates worker pool sizing
fn validate_pool_config(config: &PoolConfig) -> Result<(), ConfigError> {
    if config.max_shared_workers < 1 || config.max_shared_workers > 100 {
        return Err(ConfigError::Validation(format!(
            "max_shared_workers must be between 1 and 100, got {}",
            config.max_shared_workers
        )));
    }

    if config.max_isolated_workers < 1 || config.max_isolated_workers > 64 {
        return Err(ConfigError::Validation(format!(
            "max_isolated_workers must be between 1 and 64, got {}",
            config.max_isolated_workers
        )));
    }

    Ok(())
}

/// Validates the chart source settings
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    let index =
        Url::parse(&config.index_url).map_err(|e| ConfigError::InvalidUrl(format!(
            "Invalid index_url '{}': {}",
            config.index_url, e
        )))?;

    if index.scheme() != "http" && index.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "index_url must use http or https, got '{}'",
            index.scheme()
        )));
    }

    let origin =
        Url::parse(&config.base_origin).map_err(|e| ConfigError::InvalidUrl(format!(
            "Invalid base_origin '{}': {}",
            config.base_origin, e
        )))?;

    if origin.scheme() != "http" && origin.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base_origin must use http or https, got '{}'",
            origin.scheme()
        )));
    }

    // Relative hrefs are joined by plain prefixing, so a path on the origin
    // would silently corrupt every derived URL.
    if origin.path() != "/" && !origin.path().is_empty() {
        return Err(ConfigError::Validation(format!(
            "base_origin must not carry a path, got '{}'",
            config.base_origin
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
