//! Robots.txt parser implementation
//!
//! A small line-oriented parser for the robots exclusion protocol. Rules are
//! grouped by normalized user-agent, and path decisions use
//! longest-prefix-wins with ties going to `Allow`.

use std::collections::HashMap;

/// The rules that apply to one normalized user-agent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleGroup {
    /// Path prefixes explicitly allowed
    pub allow: Vec<String>,

    /// Path prefixes disallowed
    pub disallow: Vec<String>,

    /// Minimum seconds between requests, if the site asks for one
    pub crawl_delay: Option<u64>,
}

impl RuleGroup {
    /// Length of the longest pattern in `patterns` that `path` starts with, or 0
    fn longest_match(patterns: &[String], path: &str) -> usize {
        patterns
            .iter()
            .filter(|pattern| path.starts_with(pattern.as_str()))
            .map(|pattern| pattern.len())
            .max()
            .unwrap_or(0)
    }

    /// Checks a path against this group's rules
    pub fn is_allowed(&self, path: &str) -> bool {
        Self::longest_match(&self.allow, path) >= Self::longest_match(&self.disallow, path)
    }
}

/// Parsed robots.txt policy for a single host
///
/// A default-constructed policy has no groups: it allows every path and
/// specifies no crawl delay. That is what gets installed when a host has no
/// robots.txt or it cannot be fetched.
#[derive(Debug, Clone, Default)]
pub struct RobotsPolicy {
    groups: HashMap<String, RuleGroup>,
}

impl RobotsPolicy {
    /// Creates a permissive policy that allows everything
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Parses raw robots.txt content
    ///
    /// Malformed lines, unknown directives and unparseable crawl-delay values
    /// are skipped; parsing never fails.
    pub fn from_content(content: &str) -> Self {
        let mut groups: HashMap<String, RuleGroup> = HashMap::new();
        let mut current_agents: Vec<String> = Vec::new();
        let mut in_agent_block = false;

        for line in content.lines() {
            let line = match line.find('#') {
                Some(pos) => &line[..pos],
                None => line,
            };

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let key = key.trim().to_lowercase();
            let value = value.trim();

            if key.is_empty() {
                continue;
            }

            // Rule lines end the agent block even when their value is empty
            if matches!(key.as_str(), "allow" | "disallow" | "crawl-delay") {
                in_agent_block = false;
            }

            if value.is_empty() {
                continue;
            }

            match key.as_str() {
                "user-agent" => {
                    // Consecutive User-agent lines share one group
                    if !in_agent_block {
                        current_agents.clear();
                    }
                    current_agents.push(normalize_agent(value));
                    in_agent_block = true;
                }
                "allow" => {
                    for agent in &current_agents {
                        groups
                            .entry(agent.clone())
                            .or_default()
                            .allow
                            .push(value.to_string());
                    }
                }
                "disallow" => {
                    for agent in &current_agents {
                        groups
                            .entry(agent.clone())
                            .or_default()
                            .disallow
                            .push(value.to_string());
                    }
                }
                "crawl-delay" => {
                    if let Some(delay) = parse_delay(value) {
                        for agent in &current_agents {
                            groups.entry(agent.clone()).or_default().crawl_delay = Some(delay);
                        }
                    }
                }
                _ => {}
            }
        }

        Self { groups }
    }

    /// Finds the rule group for an agent, falling back to `*`
    pub fn group_for(&self, user_agent: &str) -> Option<&RuleGroup> {
        self.groups
            .get(&normalize_agent(user_agent))
            .or_else(|| self.groups.get("*"))
    }

    /// Checks if a URL path is allowed for the given user agent
    ///
    /// # Arguments
    ///
    /// * `path` - The URL path to check (e.g., "/page.html")
    /// * `user_agent` - The user agent string; case and version are ignored
    pub fn is_allowed(&self, path: &str, user_agent: &str) -> bool {
        match self.group_for(user_agent) {
            Some(group) => group.is_allowed(path),
            None => true,
        }
    }

    /// Gets the crawl delay (seconds) for a specific user agent
    pub fn crawl_delay(&self, user_agent: &str) -> Option<u64> {
        self.group_for(user_agent).and_then(|group| group.crawl_delay)
    }

    /// Number of distinct agent groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

/// Normalizes a user-agent token: lowercase, version suffix after `/` removed
pub fn normalize_agent(agent: &str) -> String {
    let lower = agent.trim().to_lowercase();
    match lower.find('/') {
        Some(pos) => lower[..pos].to_string(),
        None => lower,
    }
}

/// Reads the leading decimal digits of a crawl-delay value
///
/// `"10"` and `"10.5"` both give 10; values without leading digits are ignored.
fn parse_delay(value: &str) -> Option<u64> {
    let digits: &str = value
        .find(|c: char| !c.is_ascii_digit())
        .map_or(value, |end| &value[..end]);
    digits.parse().ok()
}
