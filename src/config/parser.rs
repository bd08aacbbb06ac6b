//! Configuration file loading
//!
//! The file is read once; the same bytes are parsed and fingerprinted, so the
//! logged hash always matches the settings the crawl actually ran with.

use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads, parses and validates a configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - The file could not be read, parsed or validated
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with_hash(path).map(|(config, _)| config)
}

/// Loads a configuration along with the SHA-256 hex digest of its raw text
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let hash = config_fingerprint(&content);

    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    Ok((config, hash))
}

/// SHA-256 of configuration text, hex encoded
pub fn config_fingerprint(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
