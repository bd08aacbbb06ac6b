//! Crawl frontier: queue, dedup set, scope and per-host politeness state
//!
//! Every URL that enters the queue is first inserted into the known set, and
//! the known set never shrinks, so a URL is enqueued at most once per run.
//! [`Frontier::requeue`] is the one exception: it pushes a deferred URL back
//! without touching the known set.

use crate::crawler::Fetcher;
use crate::robots::{fetch_policy, RobotsPolicy};
use crate::state::HostState;
use crate::url::{host_of, path_of, resolve_link, Scope};
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::{Duration, Instant};

/// Queue of URLs pending a visit, with the state needed to visit them politely
#[derive(Debug)]
pub struct Frontier {
    scope: Scope,
    known: HashSet<String>,
    queue: VecDeque<String>,
    hosts: HashMap<String, HostState>,
    default_delay: Duration,
    user_agent: String,
}

impl Frontier {
    /// Creates a frontier seeded with `seeds`, without fetching any robots.txt
    ///
    /// Seeds form the scope, the known set and the initial queue, in caller
    /// order. Duplicate seeds are enqueued once.
    ///
    /// # Arguments
    ///
    /// * `seeds` - Seed URLs
    /// * `default_delay` - Delay between visits to one host when robots.txt gives none
    /// * `user_agent` - Agent string used for robots.txt queries
    pub fn new<S: AsRef<str>>(seeds: &[S], default_delay: Duration, user_agent: &str) -> Self {
        let mut frontier = Self {
            scope: Scope::new(seeds.iter().map(|s| s.as_ref())),
            known: HashSet::new(),
            queue: VecDeque::new(),
            hosts: HashMap::new(),
            default_delay,
            user_agent: user_agent.to_string(),
        };

        for seed in seeds {
            frontier.enqueue(seed.as_ref().to_string());
        }

        frontier
    }

    /// Creates a frontier and fetches robots.txt for every distinct seed host
    ///
    /// A host whose robots.txt cannot be fetched gets an allow-all policy;
    /// initialization itself never fails.
    pub async fn initialize<S: AsRef<str>>(
        seeds: &[S],
        default_delay: Duration,
        user_agent: &str,
        fetcher: &Fetcher,
    ) -> Self {
        let mut frontier = Self::new(seeds, default_delay, user_agent);

        let distinct = frontier.scope.seeds().to_vec();
        for seed in &distinct {
            frontier.ensure_policy(seed, fetcher).await;
        }

        tracing::info!(
            "Frontier initialized: {} seeds, {} hosts",
            frontier.scope.len(),
            frontier.hosts.len()
        );

        frontier
    }

    /// Fetches and installs robots.txt for the host of `url` if it has none yet
    ///
    /// Returns true if a policy was fetched by this call. URLs without a host
    /// are left on default policy.
    pub async fn ensure_policy(&mut self, url: &str, fetcher: &Fetcher) -> bool {
        let host = host_of(url);
        if host.is_empty() || self.policy_for(&host).is_some() {
            return false;
        }

        let policy = fetch_policy(fetcher, url).await;
        tracing::debug!(
            "Installed robots.txt policy for {} ({} groups)",
            host,
            policy.group_count()
        );
        self.install_policy(url, policy)
    }

    /// Installs `policy` for the host of `url`
    ///
    /// Returns false (and keeps the existing policy) if the host already has one.
    pub fn install_policy(&mut self, url: &str, policy: RobotsPolicy) -> bool {
        self.hosts
            .entry(host_of(url))
            .or_default()
            .install_policy(policy)
    }

    /// Records a visit to `source` and enqueues the in-scope links found there
    ///
    /// Links are resolved against `source` first. Fragment-only links, links
    /// outside every seed prefix, and links already known are dropped.
    ///
    /// # Returns
    ///
    /// The number of links newly enqueued
    pub fn add_discovered_links<S: AsRef<str>>(&mut self, links: &[S], source: &str) -> usize {
        self.mark_visited(source);

        let mut added = 0;
        for link in links {
            let link = link.as_ref();
            let Some(resolved) = resolve_link(link, source) else {
                tracing::trace!("Dropping fragment link {:?} on {}", link, source);
                continue;
            };

            if !self.scope.contains(&resolved) {
                tracing::trace!("Out of scope: {}", resolved);
                continue;
            }

            if self.enqueue(resolved) {
                added += 1;
            }
        }

        if added > 0 {
            tracing::debug!("Discovered {} new URLs on {}", added, source);
        }

        added
    }

    /// Pops the next URL in FIFO order
    pub fn next_url(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    /// Pushes a deferred URL back to the tail of the queue
    pub fn requeue(&mut self, url: String) {
        self.queue.push_back(url);
    }

    /// Records a visit attempt against the host of `url` at the current time
    pub fn mark_visited(&mut self, url: &str) {
        self.mark_visited_at(url, Instant::now());
    }

    /// Records a visit attempt against the host of `url` at `now`
    pub fn mark_visited_at(&mut self, url: &str, now: Instant) {
        self.hosts.entry(host_of(url)).or_default().record_visit(now);
    }

    /// Checks robots.txt for `url`; hosts without a policy are allowed
    pub fn is_crawl_allowed(&self, url: &str) -> bool {
        self.hosts
            .get(&host_of(url))
            .map_or(true, |state| state.is_allowed(&path_of(url), &self.user_agent))
    }

    /// Checks whether the host of `url` may be visited now
    pub fn has_sufficient_delay(&self, url: &str) -> bool {
        self.has_sufficient_delay_at(url, Instant::now())
    }

    /// Checks whether the host of `url` may be visited at `now`
    pub fn has_sufficient_delay_at(&self, url: &str, now: Instant) -> bool {
        self.hosts.get(&host_of(url)).map_or(true, |state| {
            state.has_sufficient_delay(self.default_delay, &self.user_agent, now)
        })
    }

    /// Time left before the host of `url` may be visited, if any
    pub fn time_until_ready(&self, url: &str) -> Option<Duration> {
        self.hosts.get(&host_of(url)).and_then(|state| {
            state.time_until_ready(self.default_delay, &self.user_agent, Instant::now())
        })
    }

    /// The installed robots.txt policy for `host`
    pub fn policy_for(&self, host: &str) -> Option<&RobotsPolicy> {
        self.hosts.get(host).and_then(HostState::policy)
    }

    /// Number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns true if `url` has ever been enqueued
    pub fn is_known(&self, url: &str) -> bool {
        self.known.contains(url)
    }

    /// Number of distinct URLs ever enqueued
    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    fn enqueue(&mut self, url: String) -> bool {
        if !self.known.insert(url.clone()) {
            return false;
        }
        tracing::trace!("Enqueued {}", url);
        self.queue.push_back(url);
        true
    }
}
