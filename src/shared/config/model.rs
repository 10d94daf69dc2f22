use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub crawler: CrawlerConfig,
    pub powerbi: PowerBiConfig,
    pub sink: SinkConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct CrawlerConfig {
    /// Consecutive empty (challenge/blocked) responses tolerated for one
    /// page before the crawl gives up.
    pub max_empty_retries: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerBiConfig {
    pub report_url: String,
    pub resource_key: String,
    pub model_id: u64,
    pub entity: String,
    /// Rows requested per page window.
    pub window_count: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Identical re-sends tolerated per page on transient HTTP statuses.
    pub status_retry_limit: u32,
    /// Base pause before each request.
    pub download_delay_ms: u64,
    /// Random extra pause added on top of the base delay.
    #[serde(default = "default_delay_jitter_ms")]
    pub delay_jitter_ms: u64,
}

fn default_delay_jitter_ms() -> u64 {
    25
}

#[derive(Debug, Deserialize)]
pub struct SinkConfig {
    pub out_path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("MOJ_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
