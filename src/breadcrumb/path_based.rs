//! Default path-based breadcrumb builder.
//!
//! Derives a trail from the request path itself: a configurable front-page
//! link, then one link per ancestor segment with a humanized label.
//!
//! ```text
//! /blog/hello-world/  ->  Home > Blog [> Hello World]
//! ```
//!
//! Registered at fallback priority so route-specific builders win.

use crate::breadcrumb::{Breadcrumb, BreadcrumbBuilder};
use crate::cache::CONTEXT_URL_PATH;
use crate::config::BreadcrumbConfig;
use crate::core::Link;
use crate::route::RouteMatch;

/// Builds breadcrumbs from URL path segments
#[derive(Debug, Clone)]
pub struct PathBasedBreadcrumbBuilder {
    config: BreadcrumbConfig,
}

impl PathBasedBreadcrumbBuilder {
    pub fn new(config: BreadcrumbConfig) -> Self {
        Self { config }
    }
}

impl Default for PathBasedBreadcrumbBuilder {
    fn default() -> Self {
        Self::new(BreadcrumbConfig::default())
    }
}

impl BreadcrumbBuilder for PathBasedBreadcrumbBuilder {
    fn name(&self) -> &'static str {
        "path_based"
    }

    /// Applies everywhere: every request has a path, routed or not.
    fn applies(&self, _route: &RouteMatch) -> bool {
        true
    }

    fn build(&self, route: &RouteMatch) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.add_cache_contexts([CONTEXT_URL_PATH]);

        breadcrumb.add_link(Link::to_page(
            self.config.front.label.clone(),
            self.config.front.path.as_str(),
        ));

        let path = route.path();
        for ancestor in path.ancestors() {
            if ancestor.is_root() {
                continue; // covered by the front-page link
            }
            if &ancestor == path && !self.config.include_current {
                continue;
            }
            let label = ancestor
                .segments()
                .next_back()
                .map(humanize_segment)
                .unwrap_or_default();
            breadcrumb.add_link(Link::to_page(label, ancestor));
        }

        breadcrumb
    }
}

/// Turn a path segment into a display label.
///
/// `hello-world` -> `Hello World`, `edit_form` -> `Edit Form`
fn humanize_segment(segment: &str) -> String {
    let spaced = segment.replace(['-', '_'], " ");
    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
