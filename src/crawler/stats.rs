//! Running counters for a crawl

use crate::state::UrlState;
use std::fmt;

/// Crawl statistics summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// URLs fetched (successfully or not)
    pub visited: u64,

    /// URLs skipped because robots.txt disallows them
    pub skipped: u64,

    /// Times a URL was pushed back for politeness
    pub deferred: u64,

    /// Fetches that produced no page
    pub fetch_failures: u64,

    /// Pages handed to the index
    pub indexed: u64,

    /// Index writes that failed
    pub index_failures: u64,
}

impl CrawlStats {
    /// Counts a finished iteration by its outcome
    pub fn record(&mut self, outcome: UrlState) {
        match outcome {
            UrlState::Visited => self.visited += 1,
            UrlState::Skipped => self.skipped += 1,
            UrlState::Deferred => self.deferred += 1,
        }
    }

    /// URLs that reached a terminal state
    pub fn processed(&self) -> u64 {
        self.visited + self.skipped
    }
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} visited, {} skipped, {} deferrals, {} fetch failures, {} indexed, {} index failures",
            self.visited,
            self.skipped,
            self.deferred,
            self.fetch_failures,
            self.indexed,
            self.index_failures
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut stats = CrawlStats::default();
        stats.record(UrlState::Visited);
        stats.record(UrlState::Visited);
        stats.record(UrlState::Skipped);
        stats.record(UrlState::Deferred);

        assert_eq!(stats.visited, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.deferred, 1);
        assert_eq!(stats.processed(), 3);
    }

    #[test]
    fn test_display() {
        let stats = CrawlStats {
            visited: 3,
            indexed: 2,
            ..Default::default()
        };
        assert_eq!(
            stats.to_string(),
            "3 visited, 0 skipped, 0 deferrals, 0 fetch failures, 2 indexed, 0 index failures"
        );
    }
}
