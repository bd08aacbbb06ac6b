//! Robots.txt handling module
//!
//! This module provides functionality for fetching and parsing robots.txt files.
//! Each host's document is fetched at most once per run.

mod parser;

pub use parser::{normalize_agent, RobotsPolicy, RuleGroup};

use crate::crawler::Fetcher;
use crate::url::robots_url;

/// Fetches and parses robots.txt for the host serving `url`
///
/// Any failure (network error, non-200 status, redirect) yields an
/// allow-all policy rather than an error.
///
/// # Arguments
///
/// * `fetcher` - The fetcher used for all crawler HTTP traffic
/// * `url` - Any URL on the host whose policy is wanted
pub async fn fetch_policy(fetcher: &Fetcher, url: &str) -> RobotsPolicy {
    let location = robots_url(url);
    tracing::debug!("Fetching robots.txt: {}", location);

    match fetcher.fetch(&location).await {
        Some(page) => match page.content {
            Some(content) => RobotsPolicy::from_content(&content),
            None => {
                tracing::debug!("No robots.txt content at {}, allowing all", location);
                RobotsPolicy::allow_all()
            }
        },
        None => {
            tracing::debug!("robots.txt unavailable at {}, allowing all", location);
            RobotsPolicy::allow_all()
        }
    }
}

