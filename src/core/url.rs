//! URL path type for type-safe URL handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Always ends with `/` (page-style path)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (decode percent-encoding, strip query string).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        // Strip query string before decoding
        let path = encoded.split('?').next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page URL (with trailing slash). Normalizes leading/trailing
    /// slashes, strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        // Add leading slash if missing
        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        // Add trailing slash if missing
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Check if this is the root path `/`.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Get parent URL path.
    ///
    /// `/posts/hello/` -> `/posts/`, `/posts/` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) => Some(Self(Arc::from("/"))),
            Some(idx) => Some(Self(Arc::from(format!("{}/", &trimmed[..idx])))),
            None => Some(Self(Arc::from("/"))),
        }
    }

    /// Iterate decoded path segments.
    ///
    /// `/blog/posts/hello/` -> `["blog", "posts", "hello"]`, `/` -> `[]`
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Ancestor paths from root down to (and including) self.
    ///
    /// `/blog/posts/` -> `["/", "/blog/", "/blog/posts/"]`
    pub fn ancestors(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            chain.push(parent.clone());
            current = parent;
        }
        chain.reverse();
        chain
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_page(&s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_page() {
        let url = UrlPath::from_page("/node/add/");
        assert_eq!(url.as_str(), "/node/add/");
    }

    #[test]
    fn test_from_page_adds_slashes() {
        assert_eq!(UrlPath::from_page("node/add").as_str(), "/node/add/");
        assert_eq!(UrlPath::from_page("/node/add").as_str(), "/node/add/");
    }

    #[test]
    fn test_from_page_strips_query_and_fragment() {
        assert_eq!(
            UrlPath::from_page("/node/42/edit?destination=/admin#top").as_str(),
            "/node/42/edit/"
        );
    }

    #[test]
    fn test_from_browser_decodes() {
        let url = UrlPath::from_browser("/blog/hello%20world/");
        assert_eq!(url.as_str(), "/blog/hello world/");
    }

    #[test]
    fn test_from_browser_invalid_utf8_preserved() {
        let url = UrlPath::from_browser("/blog/%FF/");
        assert_eq!(url.as_str(), "/blog/%FF/");
    }

    #[test]
    fn test_to_encoded() {
        let url = UrlPath::from_page("/blog/hello world/");
        assert_eq!(url.to_encoded(), "/blog/hello%20world/");
    }

    #[test]
    fn test_root() {
        assert!(UrlPath::from_page("/").is_root());
        assert!(UrlPath::from_page("").is_root());
        assert!(!UrlPath::from_page("/blog/").is_root());
    }

    #[test]
    fn test_parent() {
        assert_eq!(
            UrlPath::from_page("/blog/hello/").parent(),
            Some(UrlPath::from_page("/blog/"))
        );
        assert_eq!(
            UrlPath::from_page("/blog/").parent(),
            Some(UrlPath::from_page("/"))
        );
        assert_eq!(UrlPath::from_page("/").parent(), None);
    }

    #[test]
    fn test_segments() {
        let url = UrlPath::from_page("/node/42/edit/");
        let segments: Vec<_> = url.segments().collect();
        assert_eq!(segments, ["node", "42", "edit"]);

        assert_eq!(UrlPath::from_page("/").segments().count(), 0);
    }

    #[test]
    fn test_ancestors() {
        let url = UrlPath::from_page("/blog/posts/");
        assert_eq!(
            url.ancestors(),
            [
                UrlPath::from_page("/"),
                UrlPath::from_page("/blog/"),
                UrlPath::from_page("/blog/posts/"),
            ]
        );

        assert_eq!(UrlPath::from_page("/").ancestors(), [UrlPath::from_page("/")]);
    }

    #[test]
    fn test_equality_and_hash() {
        use rustc_hash::FxHashSet;

        let mut set = FxHashSet::default();
        set.insert(UrlPath::from_page("/blog/hello/"));
        set.insert(UrlPath::from_page("blog/hello")); // normalizes to same path
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialize_deserialize() {
        let url = UrlPath::from_page("/blog/中文/");
        let json = serde_json::to_string(&url).unwrap();
        assert_eq!(json, r#""/blog/中文/""#);

        let parsed: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, url);
    }
}
