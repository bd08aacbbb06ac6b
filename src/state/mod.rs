//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `HostState`: per-host politeness clock and robots.txt policy
//! - `UrlState`: the lifecycle of a single URL through the crawl loop

mod host_state;
mod url_state;

// Re-export main types
pub use host_state::HostState;
pub use url_state::UrlState;
