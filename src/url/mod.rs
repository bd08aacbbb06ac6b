//! URL handling module for Searchlight
//!
//! URLs are carried around as plain strings; the attributes the crawl engine
//! needs (host, origin, path) are derived on demand. A URL that does not
//! parse yields empty strings rather than an error, so it simply falls back
//! to default policy.

mod resolve;
mod scope;

use url::Url;

// Re-export main functions
pub use resolve::resolve_link;
pub use scope::Scope;

/// Returns the authority of a URL: host plus port when the port is not the
/// scheme's default
///
/// # Examples
///
/// ```
/// use searchlight::url::host_of;
///
/// assert_eq!(host_of("https://Example.com/path"), "example.com");
/// assert_eq!(host_of("http://127.0.0.1:8080/"), "127.0.0.1:8080");
/// assert_eq!(host_of("not a url"), "");
/// ```
pub fn host_of(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Returns the origin of a URL (`scheme://host[:port]`), without a trailing slash
///
/// # Examples
///
/// ```
/// use searchlight::url::origin_of;
///
/// assert_eq!(origin_of("https://x.com/a/b?q=1"), "https://x.com");
/// assert_eq!(origin_of("http://localhost:3000/"), "http://localhost:3000");
/// ```
pub fn origin_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let origin = parsed.origin();
            if origin.is_tuple() {
                origin.ascii_serialization()
            } else {
                String::new()
            }
        }
        Err(_) => String::new(),
    }
}

/// Returns the path component of a URL, without query or fragment
pub fn path_of(url: &str) -> String {
    Url::parse(url)
        .map(|parsed| parsed.path().to_string())
        .unwrap_or_default()
}

/// Returns the location of the robots.txt document governing a URL's host
pub fn robots_url(url: &str) -> String {
    format!("{}/robots.txt", origin_of(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://x.com/a/b"), "x.com");
        assert_eq!(host_of("https://blog.x.com/"), "blog.x.com");
    }

    #[test]
    fn test_host_of_keeps_non_default_port() {
        assert_eq!(host_of("http://127.0.0.1:4321/page"), "127.0.0.1:4321");
        assert_eq!(host_of("https://x.com:443/page"), "x.com");
    }

    #[test]
    fn test_host_of_malformed() {
        assert_eq!(host_of(""), "");
        assert_eq!(host_of("/relative/path"), "");
        assert_eq!(host_of("mailto:someone@x.com"), "");
    }

    #[test]
    fn test_origin_of() {
        assert_eq!(origin_of("https://x.com"), "https://x.com");
        assert_eq!(origin_of("https://x.com/a/b/"), "https://x.com");
        assert_eq!(origin_of("http://x.com:8080/a"), "http://x.com:8080");
        assert_eq!(origin_of("garbage"), "");
    }

    #[test]
    fn test_path_of() {
        assert_eq!(path_of("https://x.com"), "/");
        assert_eq!(path_of("https://x.com/priv/page?x=1#top"), "/priv/page");
        assert_eq!(path_of("garbage"), "");
    }

    #[test]
    fn test_robots_url() {
        assert_eq!(robots_url("https://x.com/a/b"), "https://x.com/robots.txt");
        assert_eq!(
            robots_url("http://127.0.0.1:9000/"),
            "http://127.0.0.1:9000/robots.txt"
        );
    }
}
