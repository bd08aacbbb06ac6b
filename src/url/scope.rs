/// The set of seed URLs that bounds a crawl
///
/// A URL is in scope when some seed is a literal string prefix of it. The
/// check is intentionally coarse: `https://x.com` also admits
/// `https://x.com.example.net/`.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    seeds: Vec<String>,
}

impl Scope {
    /// Creates a scope from seed URLs, ignoring duplicates
    pub fn new<I, S>(seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for seed in seeds {
            let seed = seed.into();
            if !unique.contains(&seed) {
                unique.push(seed);
            }
        }
        Self { seeds: unique }
    }

    /// Checks if some seed is a string prefix of `url`
    ///
    /// # Examples
    ///
    /// ```
    /// use searchlight::url::Scope;
    ///
    /// let scope = Scope::new(["https://x.com"]);
    /// assert!(scope.contains("https://x.com/pub"));
    /// assert!(!scope.contains("https://y.com/pub"));
    /// ```
    pub fn contains(&self, url: &str) -> bool {
        self.seeds.iter().any(|seed| url.starts_with(seed.as_str()))
    }

    /// The seeds, in first-seen order
    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    /// Number of distinct seeds
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}
