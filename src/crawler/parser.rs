//! Lightweight HTML extraction
//!
//! Titles and links are pulled out with regular expressions rather than a
//! DOM parser:
//! - Title: the first `<title>...</title>` span, case-insensitive, may span lines
//! - Links: the `href` of every `<a>` tag, quoted or unquoted, in document
//!   order and without deduplication

use regex::Regex;
use std::sync::OnceLock;

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static LINK_RE: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| {
        Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern is valid")
    })
}

fn link_re() -> &'static Regex {
    LINK_RE.get_or_init(|| {
        Regex::new(r#"(?i)<a\s+[^>]*href\s*=\s*(?:["']([^"']+)["']|([^\s>]+))"#)
            .expect("link pattern is valid")
    })
}

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title (from <title> tag)
    pub title: Option<String>,

    /// Raw href values, unresolved
    pub links: Vec<String>,
}

/// Extracts the title and links from an HTML body
///
/// # Example
///
/// ```
/// use searchlight::crawler::parse_html;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.title, Some("Test".to_string()));
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    ParsedPage {
        title: extract_title(html),
        links: extract_links(html),
    }
}

/// Returns the raw text of the first `<title>` element, whitespace included
pub fn extract_title(html: &str) -> Option<String> {
    title_re()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Returns every anchor `href` value in document order
pub fn extract_links(html: &str) -> Vec<String> {
    link_re()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title>My Page</title></head></html>";
        assert_eq!(extract_title(html), Some("My Page".to_string()));
    }

    #[test]
    fn test_title_case_and_attributes() {
        let html = r#"<TITLE lang="en">Upper</TITLE>"#;
        assert_eq!(extract_title(html), Some("Upper".to_string()));
    }

    #[test]
    fn test_title_spans_lines() {
        let html = "<title>\n  Line one\n  line two\n</title>";
        assert_eq!(
            extract_title(html),
            Some("\n  Line one\n  line two\n".to_string())
        );
    }

    #[test]
    fn test_title_kept_verbatim() {
        assert_eq!(extract_title("<title>  Padded </title>"), Some("  Padded ".to_string()));
        assert_eq!(extract_title("<title></title>"), Some(String::new()));
    }

    #[test]
    fn test_first_title_wins() {
        let html = "<title>First</title><svg><title>Second</title></svg>";
        assert_eq!(extract_title(html), Some("First".to_string()));
    }

    #[test]
    fn test_no_title() {
        assert_eq!(extract_title("<html><body>No title</body></html>"), None);
        assert_eq!(extract_title("<title>unterminated"), None);
    }

    #[test]
    fn test_extract_quoted_links() {
        let html = r#"<a href="/one">1</a> <a class="x" href='two.html'>2</a>"#;
        assert_eq!(extract_links(html), vec!["/one", "two.html"]);
    }

    #[test]
    fn test_extract_unquoted_links() {
        let html = "<a href=/plain>p</a><a href=https://x.com/abs>a</a>";
        assert_eq!(extract_links(html), vec!["/plain", "https://x.com/abs"]);
    }

    #[test]
    fn test_links_keep_order_and_duplicates() {
        let html = r##"<a href="/b">b</a><a href="#top">t</a><a href="/a">a</a><a href="/b">b</a>"##;
        assert_eq!(extract_links(html), vec!["/b", "#top", "/a", "/b"]);
    }

    #[test]
    fn test_links_case_insensitive_and_spaced() {
        let html = r#"<A HREF = "/upper">U</A>"#;
        assert_eq!(extract_links(html), vec!["/upper"]);
    }

    #[test]
    fn test_non_anchor_hrefs_ignored() {
        let html = r#"<link rel="stylesheet" href="/style.css"><abbr href="/no">x</abbr>"#;
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_parse_html() {
        let parsed = parse_html(r#"<title>T</title><a href="/x">x</a>"#);
        assert_eq!(
            parsed,
            ParsedPage {
                title: Some("T".to_string()),
                links: vec!["/x".to_string()],
            }
        );
    }
}
