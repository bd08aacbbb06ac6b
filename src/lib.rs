//! Searchlight: a scoped, polite web crawler
//!
//! This crate implements the ingestion front-end of a search index. Starting
//! from a set of seed URLs it discovers pages confined to those seeds, obeys
//! robots.txt rules and crawl delays per host, and forwards each fetched
//! page's title and body to an index store.

pub mod config;
pub mod crawler;
pub mod robots;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Searchlight operations
#[derive(Debug, Error)]
pub enum SearchlightError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

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

/// Result type alias for Searchlight operations
pub type Result<T> = std::result::Result<T, SearchlightError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, CrawlStats, Fetcher, Frontier, PageResult};
pub use robots::{RobotsPolicy, RuleGroup};
pub use state::{HostState, UrlState};
pub use storage::{PageIndex, SqliteIndex};
