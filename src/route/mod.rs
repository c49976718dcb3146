//! Route match passed into breadcrumb builders.
//!
//! The host router resolves the incoming request and hands builders an
//! immutable [`RouteMatch`] for the duration of one request. Requests that
//! did not match a named route carry no route name; that is a normal state,
//! not an error.

use rustc_hash::FxHashMap;

use crate::core::UrlPath;

/// The resolved route of the current request
///
/// Read-only, caller-owned, valid for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteMatch {
    /// Machine name of the matched route (e.g. `node.add`), if any
    name: Option<String>,
    /// Request path (decoded)
    path: UrlPath,
    /// Raw route parameters extracted from the path
    parameters: FxHashMap<String, String>,
}

impl RouteMatch {
    /// Route match for a named route.
    pub fn new(name: impl Into<String>, path: impl Into<UrlPath>) -> Self {
        Self {
            name: Some(name.into()),
            path: path.into(),
            parameters: FxHashMap::default(),
        }
    }

    /// Route match for a request that resolved to no named route.
    pub fn unrouted(path: impl Into<UrlPath>) -> Self {
        Self {
            name: None,
            path: path.into(),
            parameters: FxHashMap::default(),
        }
    }

    /// Attach a route parameter (builder-style).
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Machine name of the matched route, if the request matched one.
    #[inline]
    pub fn route_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Decoded request path.
    #[inline]
    pub fn path(&self) -> &UrlPath {
        &self.path
    }

    /// Look up a route parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_route() {
        let route = RouteMatch::new("node.add", "/node/add/article");
        assert_eq!(route.route_name(), Some("node.add"));
        assert_eq!(route.path().as_str(), "/node/add/article/");
    }

    #[test]
    fn test_unrouted() {
        let route = RouteMatch::unrouted("/some/page");
        assert_eq!(route.route_name(), None);
    }

    #[test]
    fn test_parameters() {
        let route =
            RouteMatch::new("entity.node.edit_form", "/node/42/edit").with_parameter("node", "42");
        assert_eq!(route.parameter("node"), Some("42"));
        assert_eq!(route.parameter("user"), None);
    }
}
