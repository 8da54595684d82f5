use serde::Deserialize;

/// Main configuration structure for marquee
///
/// Every section defaults to the built-in settings when absent, so a partial
/// (or missing) configuration file is valid.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pools: PoolConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Worker pool sizing
#[derive(Debug, Clone, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of concurrent workers sharing one HTTP client
    #[serde(rename = "max-shared-workers", default = "default_shared_workers")]
    pub max_shared_workers: usize,

    /// Maximum number of isolated workers, each with its own HTTP client
    #[serde(rename = "max-isolated-workers", default = "default_isolated_workers")]
    pub max_isolated_workers: usize,
}

/// Where the chart lives and how we identify ourselves to it
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// URL of the ranked index page listing the movies
    #[serde(rename = "index-url", default = "default_index_url")]
    pub index_url: String,

    /// Origin prefixed to the relative detail-page hrefs found on the index
    #[serde(rename = "base-origin", default = "default_base_origin")]
    pub base_origin: String,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV file records are appended to
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

fn default_shared_workers() -> usize {
    10
}

fn default_isolated_workers() -> usize {
    4
}

fn default_index_url() -> String {
    "https://www.imdb.com/chart/moviemeter/?ref_=nv_mv_mpm".to_string()
}

fn default_base_origin() -> String {
    "https://imdb.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.246"
        .to_string()
}

fn default_csv_path() -> String {
    "movies.csv".to_string()
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_shared_workers: default_shared_workers(),
            max_isolated_workers: default_isolated_workers(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            index_url: default_index_url(),
            base_origin: default_base_origin(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}
