//! Link extraction from HTML pages

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract the distinct `href` targets of all `<a>` tags in `content`.
///
/// Targets are returned verbatim; resolving them against the corpus is the
/// graph builder's job.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
