use crate::config::types::{Config, CrawlerConfig, IndexConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_index_config(&config.index)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.seed_links.is_empty() {
        return Err(ConfigError::Validation(
            "seed-links must contain at least one URL".to_string(),
        ));
    }

    for seed in &config.seed_links {
        validate_seed(seed)?;
    }

    if config.requeue_pause_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "requeue-pause-ms must be >= 1, got {}",
            config.requeue_pause_ms
        )));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1 when set".to_string(),
        ));
    }

    Ok(())
}

/// Validates a single seed URL: absolute, http(s), with a host
fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    if let Some(contact) = &config.contact_url {
        Url::parse(contact)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates index configuration
fn validate_index_config(config: &IndexConfig) -> Result<(), ConfigError> {
    if config.database_path.is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            crawler: CrawlerConfig {
                default_delay: 1,
                requeue_pause_ms: 1000,
                request_timeout_secs: None,
                seed_links: vec!["https://example.com".to_string()],
            },
            user_agent: UserAgentConfig {
                crawler_name: "SearchLight".to_string(),
                crawler_version: "0.1".to_string(),
                contact_url: None,
            },
            index: IndexConfig {
                database_path: "./searchlight.db".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_seed() {
        assert!(validate_seed("https://example.com").is_ok());
        assert!(validate_seed("http://127.0.0.1:8080/docs").is_ok());

        assert!(validate_seed("").is_err());
        assert!(validate_seed("example.com").is_err());
        assert!(validate_seed("ftp://example.com").is_err());
        assert!(validate_seed("mailto:bot@example.com").is_err());
    }

    #[test]
    fn test_bad_crawler_name() {
        let mut config = valid_config();
        config.user_agent.crawler_name = "Search Light".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_pause_rejected() {
        let mut config = valid_config();
        config.crawler.requeue_pause_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.crawler.request_timeout_secs = Some(0);
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_database_path_rejected() {
        let mut config = valid_config();
        config.index.database_path = String::new();
        assert!(validate(&config).is_err());
    }
}
