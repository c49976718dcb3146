//! Breadcrumb assembly: the trail value, builder contract, and dispatch.

mod builder;
mod manager;
mod node_form;
mod path_based;

pub use builder::BreadcrumbBuilder;
pub use manager::BreadcrumbManager;
pub use node_form::NodeFormBreadcrumbBuilder;
pub use path_based::PathBasedBreadcrumbBuilder;

use serde::Serialize;

use crate::cache::CacheableMetadata;
use crate::core::Link;

/// An assembled breadcrumb trail
///
/// Created fresh per request and handed to the rendering layer together with
/// its cacheability declarations. Value-comparable: building the same route
/// twice yields equal trails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Breadcrumb {
    links: Vec<Link>,
    cacheability: CacheableMetadata,
}

impl Breadcrumb {
    /// Empty trail with no cacheability declarations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a link to the trail.
    pub fn add_link(&mut self, link: Link) -> &mut Self {
        self.links.push(link);
        self
    }

    /// Declare cache contexts the trail varies by.
    pub fn add_cache_contexts<I, S>(&mut self, contexts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<std::borrow::Cow<'static, str>>,
    {
        self.cacheability.add_contexts(contexts);
        self
    }

    /// Links in display order.
    #[inline]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Cacheability declarations.
    #[inline]
    pub fn cacheability(&self) -> &CacheableMetadata {
        &self.cacheability
    }
}
