use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Searchlight
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub index: IndexConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Delay between visits to the same host when robots.txt gives none (seconds)
    #[serde(rename = "default-delay", default = "default_delay")]
    pub default_delay: u64,

    /// Pause after deferring a URL for politeness (milliseconds)
    #[serde(rename = "requeue-pause-ms", default = "default_requeue_pause_ms")]
    pub requeue_pause_ms: u64,

    /// Per-request timeout; no timeout when absent
    #[serde(rename = "request-timeout-secs", default)]
    pub request_timeout_secs: Option<u64>,

    /// Seed URLs. Every crawled URL must start with one of these.
    #[serde(rename = "seed-links")]
    pub seed_links: Vec<String>,
}

impl CrawlerConfig {
    /// Default per-host delay as a Duration
    pub fn default_delay(&self) -> Duration {
        Duration::from_secs(self.default_delay)
    }

    /// Politeness pause as a Duration
    pub fn requeue_pause(&self) -> Duration {
        Duration::from_millis(self.requeue_pause_ms)
    }
}

fn default_delay() -> u64 {
    1
}

fn default_requeue_pause_ms() -> u64 {
    1000
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// The `User-Agent` header sent with every request
    ///
    /// Format: `Name/Version (+ContactURL)`, or `Name/Version (WebCrawler)`
    /// when no contact URL is configured.
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(contact) => format!(
                "{}/{} (+{})",
                self.crawler_name, self.crawler_version, contact
            ),
            None => format!(
                "{}/{} (WebCrawler)",
                self.crawler_name, self.crawler_version
            ),
        }
    }

    /// The agent string used when querying robots.txt rules
    pub fn robots_agent(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Index store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}
