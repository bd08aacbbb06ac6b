use crate::robots::RobotsPolicy;
use std::time::{Duration, Instant};

/// Tracks the state of a host during crawling
///
/// Politeness is enforced per host, not per URL: every visit attempt to any
/// URL on the host restarts the delay clock.
#[derive(Debug, Clone, Default)]
pub struct HostState {
    /// When a URL on this host was last visited (attempted)
    pub last_visit: Option<Instant>,

    /// The host's robots.txt policy, once fetched
    policy: Option<RobotsPolicy>,
}

impl HostState {
    /// The installed robots.txt policy, if any
    pub fn policy(&self) -> Option<&RobotsPolicy> {
        self.policy.as_ref()
    }

    /// Installs the host's policy
    ///
    /// A policy is installed at most once; later calls are ignored and
    /// return `false`.
    pub fn install_policy(&mut self, policy: RobotsPolicy) -> bool {
        if self.policy.is_some() {
            return false;
        }
        self.policy = Some(policy);
        true
    }

    /// Records a visit attempt, overwriting any earlier timestamp
    pub fn record_visit(&mut self, now: Instant) {
        self.last_visit = Some(now);
    }

    /// Checks a path against the host's policy; no policy means allowed
    pub fn is_allowed(&self, path: &str, user_agent: &str) -> bool {
        self.policy
            .as_ref()
            .map_or(true, |policy| policy.is_allowed(path, user_agent))
    }

    /// The delay required between visits: robots.txt crawl-delay if present,
    /// otherwise `default_delay`
    pub fn required_delay(&self, default_delay: Duration, user_agent: &str) -> Duration {
        self.policy
            .as_ref()
            .and_then(|policy| policy.crawl_delay(user_agent))
            .map(Duration::from_secs)
            .unwrap_or(default_delay)
    }

    /// Checks if enough time has passed since the last visit
    ///
    /// # Arguments
    ///
    /// * `default_delay` - Delay to use when robots.txt specifies none
    /// * `user_agent` - Agent string for crawl-delay lookup
    /// * `now` - The current time instant
    pub fn has_sufficient_delay(
        &self,
        default_delay: Duration,
        user_agent: &str,
        now: Instant,
    ) -> bool {
        self.time_until_ready(default_delay, user_agent, now)
            .is_none()
    }

    /// Calculates the time until the host may be visited again
    ///
    /// Returns None if a visit can be made now.
    pub fn time_until_ready(
        &self,
        default_delay: Duration,
        user_agent: &str,
        now: Instant,
    ) -> Option<Duration> {
        let last = self.last_visit?;
        let required = self.required_delay(default_delay, user_agent);
        let elapsed = now.duration_since(last);
        if elapsed < required {
            Some(required - elapsed)
        } else {
            None
        }
    }
}
