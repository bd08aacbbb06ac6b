//! HTTP fetcher implementation
//!
//! Each call to [`Fetcher::fetch`] issues exactly one GET request:
//! - Redirects are never followed; a 301/302 comes back as a pseudo-page
//!   whose only link is the redirect target
//! - A 200 yields the body, its title and its raw anchor links
//! - Anything else (transport error, other status) yields no page

use crate::config::{Config, UserAgentConfig};
use crate::crawler::parser::parse_html;
use reqwest::{header::LOCATION, redirect::Policy, Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

/// The outcome of a successful fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    /// Raw response body (absent for redirects)
    pub content: Option<String>,

    /// Text of the first `<title>` element, if any
    pub title: Option<String>,

    /// Raw link strings in document order, duplicates included
    pub links: Vec<String>,
}

impl PageResult {
    /// Builds the result for a 200 response body
    pub fn from_body(body: String) -> Self {
        let parsed = parse_html(&body);
        Self {
            content: Some(body),
            title: parsed.title,
            links: parsed.links,
        }
    }

    /// Builds the pseudo-page reported for a redirect
    pub fn redirect(target: Option<String>) -> Self {
        Self {
            content: None,
            title: None,
            links: target.into_iter().collect(),
        }
    }

    /// Returns true if this result carries a page body
    pub fn has_content(&self) -> bool {
        self.content.is_some()
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
/// * `timeout` - Optional per-request timeout; `None` waits indefinitely
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    config: &UserAgentConfig,
    timeout: Option<Duration>,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.header_value())
        .redirect(Policy::none()) // Redirects surface as links
        .gzip(true)
        .brotli(true);

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Single-shot page fetcher
///
/// Owns one HTTP client for the lifetime of the crawl; the client's
/// connections are released when the fetcher is dropped.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher identifying itself with `user_agent`
    pub fn new(
        user_agent: &UserAgentConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent, timeout)?,
        })
    }

    /// Creates a fetcher from the full crawler configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use searchlight::config::load_config;
    /// use searchlight::crawler::Fetcher;
    /// use std::path::Path;
    ///
    /// let config = load_config(Path::new("searchlight.toml")).unwrap();
    /// let fetcher = Fetcher::from_config(&config).unwrap();
    /// ```
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let timeout = config.crawler.request_timeout_secs.map(Duration::from_secs);
        Ok(Self::new(&config.user_agent, timeout)?)
    }

    /// Fetches a URL once
    ///
    /// # Outcomes
    ///
    /// | Response | Result |
    /// |----------|--------|
    /// | Transport error | `None` |
    /// | HTTP 301 / 302 | `Some`, no content, links = `[Location]` |
    /// | HTTP 200 | `Some`, content + title + links |
    /// | Any other status | `None` |
    pub async fn fetch(&self, url: &str) -> Option<PageResult> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        match response.status() {
            StatusCode::MOVED_PERMANENTLY | StatusCode::FOUND => {
                let target = redirect_target(url, &response);
                tracing::debug!("{} redirects to {:?}", url, target);
                Some(PageResult::redirect(target))
            }
            StatusCode::OK => match response.text().await {
                Ok(body) => Some(PageResult::from_body(body)),
                Err(e) => {
                    tracing::warn!("Failed to read body of {}: {}", url, e);
                    None
                }
            },
            status => {
                tracing::debug!("{} returned HTTP {}", url, status.as_u16());
                None
            }
        }
    }
}

/// Resolves the `Location` header of a redirect against the request URL
fn redirect_target(url: &str, response: &Response) -> Option<String> {
    let location = response.headers().get(LOCATION)?.to_str().ok()?;
    if location.is_empty() {
        return None;
    }

    match Url::parse(url).and_then(|base| base.join(location)) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(_) => Some(location.to_string()),
    }
}
