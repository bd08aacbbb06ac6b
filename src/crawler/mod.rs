//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - Single-shot HTTP fetching with redirects surfaced as links
//! - Regex-based title and link extraction
//! - The frontier: queue, dedup, scope and per-host politeness
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;
mod stats;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, Fetcher, PageResult};
pub use frontier::Frontier;
pub use parser::{extract_links, extract_title, parse_html, ParsedPage};
pub use stats::CrawlStats;
