//! Crawler coordinator - main crawl orchestration logic
//!
//! A single cooperative loop drives the crawl until the frontier is empty:
//!
//! 1. Pop the next URL
//! 2. Disallowed by robots.txt: record the visit and skip it
//! 3. Host not ready: requeue the URL and pause
//! 4. Fetch, then record the visit whatever the outcome
//! 5. Enqueue discovered links and index the page content
//!
//! Nothing that goes wrong inside the loop aborts the crawl.

use crate::config::Config;
use crate::crawler::{CrawlStats, Fetcher, Frontier, PageResult};
use crate::state::UrlState;
use crate::storage::PageIndex;
use std::time::{Duration, Instant};

/// Progress is logged every this many visits
const PROGRESS_INTERVAL: u64 = 25;

/// Main crawler coordinator structure
pub struct Coordinator<I: PageIndex> {
    frontier: Frontier,
    fetcher: Fetcher,
    index: I,
    requeue_pause: Duration,
    stats: CrawlStats,
}

impl<I: PageIndex> Coordinator<I> {
    /// Creates a coordinator from configuration
    ///
    /// Builds the HTTP client and initializes the frontier, which fetches
    /// robots.txt for each seed host.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `index` - Where fetched pages are sent
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(SearchlightError)` - The HTTP client could not be built
    pub async fn new(config: &Config, index: I) -> crate::Result<Self> {
        let fetcher = Fetcher::from_config(config)?;
        let frontier = Frontier::initialize(
            &config.crawler.seed_links,
            config.crawler.default_delay(),
            &config.user_agent.robots_agent(),
            &fetcher,
        )
        .await;

        Ok(Self::from_parts(
            frontier,
            fetcher,
            index,
            config.crawler.requeue_pause(),
        ))
    }

    /// Assembles a coordinator from already-built parts
    pub fn from_parts(
        frontier: Frontier,
        fetcher: Fetcher,
        index: I,
        requeue_pause: Duration,
    ) -> Self {
        Self {
            frontier,
            fetcher,
            index,
            requeue_pause,
            stats: CrawlStats::default(),
        }
    }

    /// Runs the crawl loop until the frontier is empty
    pub async fn run(&mut self) -> CrawlStats {
        tracing::info!("Starting crawl with {} queued URLs", self.frontier.len());
        let start_time = Instant::now();

        while let Some(url) = self.frontier.next_url() {
            let outcome = self.process_url(&url).await;
            tracing::trace!("{} {}", url, outcome);
            self.stats.record(outcome);

            if outcome == UrlState::Visited && self.stats.visited % PROGRESS_INTERVAL == 0 {
                tracing::info!(
                    "Progress: {}, {} in frontier, {} known",
                    self.stats,
                    self.frontier.len(),
                    self.frontier.known_count()
                );
            }
        }

        tracing::info!(
            "Crawl completed in {:?}: {} URLs processed ({})",
            start_time.elapsed(),
            self.stats.processed(),
            self.stats
        );

        self.stats
    }

    /// Runs one loop iteration for a URL just popped from the frontier
    ///
    /// Returns the state the URL ended the iteration in.
    async fn process_url(&mut self, url: &str) -> UrlState {
        self.frontier.ensure_policy(url, &self.fetcher).await;

        if !self.frontier.is_crawl_allowed(url) {
            self.frontier.mark_visited(url);
            tracing::info!("Skipping {} (disallowed by robots.txt)", url);
            return UrlState::Skipped;
        }

        if !self.frontier.has_sufficient_delay(url) {
            tracing::debug!(
                "Deferring {} (host ready in {:?})",
                url,
                self.frontier.time_until_ready(url)
            );
            self.frontier.requeue(url.to_string());
            tokio::time::sleep(self.requeue_pause).await;
            return UrlState::Deferred;
        }

        tracing::info!("Visiting {}", url);
        let result = self.fetcher.fetch(url).await;
        self.frontier.mark_visited(url);

        match result {
            Some(page) => self.handle_page(url, page),
            None => {
                self.stats.fetch_failures += 1;
                tracing::warn!("No page fetched for {}", url);
            }
        }

        UrlState::Visited
    }

    /// Enqueues a page's links and forwards its content to the index
    fn handle_page(&mut self, url: &str, page: PageResult) {
        self.frontier.add_discovered_links(&page.links, url);

        let Some(content) = page.content.as_deref() else {
            return;
        };

        match self
            .index
            .upsert_page(url, page.title.as_deref(), Some(content))
        {
            Ok(()) => {
                self.stats.indexed += 1;
                tracing::info!("Indexed {} ({:?})", url, page.title.as_deref().unwrap_or(""));
            }
            Err(e) => {
                self.stats.index_failures += 1;
                tracing::warn!("Failed to index {}: {}", url, e);
            }
        }
    }

    pub fn index(&self) -> &I {
        &self.index
    }
}

/// Runs a complete crawl with the given index
///
/// # Example
///
/// ```no_run
/// use searchlight::config::load_config;
/// use searchlight::crawler::run_crawl;
/// use searchlight::storage::open_index;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("searchlight.toml"))?;
/// let index = open_index(Path::new(&config.index.database_path))?;
/// let stats = run_crawl(&config, index).await?;
/// println!("{}", stats);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl<I: PageIndex>(config: &Config, index: I) -> crate::Result<CrawlStats> {
    let mut coordinator = Coordinator::new(config, index).await?;
    Ok(coordinator.run().await)
}
