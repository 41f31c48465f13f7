use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub products: ProductsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Number of records to generate
    pub record_count: usize,
    /// Instant the newest record is stamped with; older records step back one day each
    pub reference_time: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Percentile rank reported next to mean and median
    #[serde(default = "default_percentile")]
    pub percentile: f64,
    /// Regions listed in the breakdown
    #[serde(default = "default_top_regions")]
    pub top_regions: usize,
    /// Records logged as a preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_percentile() -> f64 {
    90.0
}

fn default_top_regions() -> usize {
    6
}

fn default_preview_rows() -> usize {
    20
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            percentile: default_percentile(),
            top_regions: default_top_regions(),
            preview_rows: default_preview_rows(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProductsConfig {
    /// Name filter for the product listing; empty keeps all products
    #[serde(default)]
    pub search: String,
    /// Sort code: "default", "price-asc", "price-desc" or "rating"
    #[serde(default = "default_product_sort")]
    pub sort: String,
}

fn default_product_sort() -> String {
    "default".to_string()
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: default_product_sort(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
record_count = 500
reference_time = "2025-01-01T00:00:00Z"

[report]
percentile = 90.0
top_regions = 6
preview_rows = 20

[products]
search = ""
sort = "price-asc"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from: {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}
