//! Where a URL ends up after one pass through the crawl loop
//!
//! ```text
//! queued -> { skipped | deferred | visited }
//!            deferred -> queued (tail)
//! ```

use std::fmt;

/// The outcome of processing one URL popped from the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlState {
    /// Disallowed by robots.txt; recorded as visited without fetching
    Skipped,

    /// Host not ready yet; pushed back to the queue tail
    Deferred,

    /// Fetch attempted (successfully or not) and recorded
    Visited,
}

impl UrlState {
    /// Short lowercase name used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Deferred => "deferred",
            Self::Visited => "visited",
        }
    }
}

impl fmt::Display for UrlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(UrlState::Skipped.to_string(), "skipped");
        assert_eq!(UrlState::Deferred.to_string(), "deferred");
        assert_eq!(UrlState::Visited.to_string(), "visited");
    }
}
