use crate::url::origin_of;

/// Resolves a raw link found on `source` into an absolute URL string
///
/// Resolution is deliberately string-based rather than RFC 3986 based:
///
/// - fragment-only links (`#...`) and empty links are dropped;
/// - links starting with `http` are taken as already absolute;
/// - links starting with `/` are appended to the source's origin;
/// - anything else is appended to the source URL (minus one trailing slash)
///   with a `/` separator.
///
/// # Examples
///
/// ```
/// use searchlight::url::resolve_link;
///
/// let source = "https://x.com/a/b";
/// assert_eq!(resolve_link("c", source).as_deref(), Some("https://x.com/a/b/c"));
/// assert_eq!(resolve_link("/c", source).as_deref(), Some("https://x.com/c"));
/// assert_eq!(resolve_link("#frag", source), None);
/// ```
pub fn resolve_link(link: &str, source: &str) -> Option<String> {
    if link.is_empty() || link.starts_with('#') {
        return None;
    }

    if link.starts_with("http") {
        return Some(link.to_string());
    }

    if link.starts_with('/') {
        return Some(format!("{}{}", origin_of(source), link));
    }

    let base = source.strip_suffix('/').unwrap_or(source);
    Some(format!("{}/{}", base, link))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_dropped() {
        assert_eq!(resolve_link("#top", "https://x.com/a"), None);
        assert_eq!(resolve_link("#", "https://x.com/a"), None);
    }

    #[test]
    fn test_empty_dropped() {
        assert_eq!(resolve_link("", "https://x.com/a"), None);
    }

    #[test]
    fn test_absolute_kept_verbatim() {
        assert_eq!(
            resolve_link("https://other.com/p", "https://x.com/a").as_deref(),
            Some("https://other.com/p")
        );
        assert_eq!(
            resolve_link("http://x.com/p#sec", "https://x.com/a").as_deref(),
            Some("http://x.com/p#sec")
        );
    }

    #[test]
    fn test_root_relative() {
        assert_eq!(
            resolve_link("/c", "https://x.com/a/b").as_deref(),
            Some("https://x.com/c")
        );
        assert_eq!(
            resolve_link("/c?q=1", "https://x.com:8443/a/").as_deref(),
            Some("https://x.com:8443/c?q=1")
        );
    }

    #[test]
    fn test_path_relative() {
        assert_eq!(
            resolve_link("c", "https://x.com/a/b").as_deref(),
            Some("https://x.com/a/b/c")
        );
    }

    #[test]
    fn test_path_relative_strips_one_trailing_slash() {
        assert_eq!(
            resolve_link("c", "https://x.com/a/b/").as_deref(),
            Some("https://x.com/a/b/c")
        );
        assert_eq!(
            resolve_link("c", "https://x.com/a//").as_deref(),
            Some("https://x.com/a//c")
        );
    }

    #[test]
    fn test_schemeless_non_http_treated_as_relative() {
        assert_eq!(
            resolve_link("mailto:bot@x.com", "https://x.com").as_deref(),
            Some("https://x.com/mailto:bot@x.com")
        );
    }
}
