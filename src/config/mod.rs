//! Configuration module for Searchlight
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! The crawl engine itself never reads files: it receives the parsed [`Config`].
//!
//! # Example
//!
//! ```no_run
//! use searchlight::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("searchlight.toml")).unwrap();
//! println!("Crawling {} seeds", config.crawler.seed_links.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, IndexConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{config_fingerprint, load_config, load_config_with_hash};
