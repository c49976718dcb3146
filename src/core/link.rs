//! Breadcrumb link: display text plus a navigation target.

use serde::Serialize;

use crate::core::UrlPath;

/// Where a breadcrumb link points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Site-internal page path (decoded)
    Internal(UrlPath),
    /// External URL with a scheme (https://, mailto:, etc.)
    External(String),
}

impl LinkTarget {
    /// Parse a target string into its kind.
    ///
    /// Anything with a valid URL scheme is external; everything else is
    /// treated as a site-internal page path and normalized.
    pub fn parse(target: &str) -> Self {
        if is_external_link(target) {
            Self::External(target.to_string())
        } else {
            Self::Internal(UrlPath::from_page(target))
        }
    }

    /// Target as it should appear in an `href` (internal paths encoded).
    pub fn to_href(&self) -> String {
        match self {
            Self::Internal(path) => path.to_encoded(),
            Self::External(url) => url.clone(),
        }
    }
}

impl Serialize for LinkTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Internal(path) => serializer.serialize_str(path.as_str()),
            Self::External(url) => serializer.serialize_str(url),
        }
    }
}

/// One entry in a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Display label
    pub text: String,
    /// Navigation target
    pub target: LinkTarget,
}

impl Link {
    /// Create a link to a site-internal page.
    pub fn to_page(text: impl Into<String>, path: impl Into<UrlPath>) -> Self {
        Self {
            text: text.into(),
            target: LinkTarget::Internal(path.into()),
        }
    }

    /// Create a link from a raw target string (internal or external).
    pub fn parse(text: impl Into<String>, target: &str) -> Self {
        Self {
            text: text.into(),
            target: LinkTarget::parse(target),
        }
    }
}

/// Check if a link has a URL scheme (http:, mailto:, etc.)
///
/// A valid scheme must have at least 1 character before the colon and only
/// contain ASCII alphanumeric or `+`, `-`, `.`.
#[inline]
pub(crate) fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert_eq!(
            LinkTarget::parse("https://example.com"),
            LinkTarget::External("https://example.com".to_string())
        );
        assert_eq!(
            LinkTarget::parse("mailto:user@example.com"),
            LinkTarget::External("mailto:user@example.com".to_string())
        );
    }

    #[test]
    fn test_parse_internal() {
        assert_eq!(
            LinkTarget::parse("/blog/hello"),
            LinkTarget::Internal(UrlPath::from_page("/blog/hello/"))
        );
        // Relative paths normalize to site-root paths
        assert_eq!(
            LinkTarget::parse("blog/hello"),
            LinkTarget::Internal(UrlPath::from_page("/blog/hello/"))
        );
    }

    #[test]
    fn test_to_href_encodes_internal() {
        let target = LinkTarget::Internal(UrlPath::from_page("/blog/hello world/"));
        assert_eq!(target.to_href(), "/blog/hello%20world/");

        let target = LinkTarget::External("https://example.com/?q=1".to_string());
        assert_eq!(target.to_href(), "https://example.com/?q=1");
    }

    #[test]
    fn test_is_external_link() {
        assert!(is_external_link("https://example.com"));
        assert!(is_external_link("tel:+1234567890"));
        assert!(!is_external_link("/about"));
        assert!(!is_external_link("./file.txt"));
    }

    #[test]
    fn test_link_serialize() {
        let link = Link::to_page("Home", "/");
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, r#"{"text":"Home","target":"/"}"#);
    }
}
