//! Priority-ordered breadcrumb builder dispatch.

use crate::breadcrumb::{
    Breadcrumb, BreadcrumbBuilder, NodeFormBreadcrumbBuilder, PathBasedBreadcrumbBuilder,
};
use crate::config::BreadcrumbConfig;
use crate::core::Priority;
use crate::debug;
use crate::route::RouteMatch;

struct Registration {
    priority: Priority,
    builder: Box<dyn BreadcrumbBuilder>,
}

/// Explicit registry of breadcrumb builders
///
/// Builders are consulted highest priority first; among equal priorities,
/// earlier registration wins. The first builder whose `applies` returns true
/// owns the trail for the request.
pub struct BreadcrumbManager {
    builders: Vec<Registration>,
}

impl BreadcrumbManager {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Registry with the stock builders: the node-form override above the
    /// path-based fallback.
    pub fn with_defaults(config: BreadcrumbConfig) -> Self {
        let mut manager = Self::new();
        manager.register(Priority::Override, Box::new(NodeFormBreadcrumbBuilder::new()));
        manager.register(
            Priority::Fallback,
            Box::new(PathBasedBreadcrumbBuilder::new(config)),
        );
        manager
    }

    /// Register a builder at the given priority.
    pub fn register(&mut self, priority: Priority, builder: Box<dyn BreadcrumbBuilder>) {
        self.builders.push(Registration { priority, builder });
        // Stable sort keeps registration order among equal priorities
        self.builders
            .sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Build the breadcrumb for a route.
    ///
    /// Returns an empty trail (no links, no cache contexts) when no
    /// registered builder applies.
    pub fn build(&self, route: &RouteMatch) -> Breadcrumb {
        for registration in &self.builders {
            if registration.builder.applies(route) {
                debug!("breadcrumb"; "route {:?} handled by `{}`",
                    route.route_name().unwrap_or("<unrouted>"),
                    registration.builder.name());
                return registration.builder.build(route);
            }
        }

        debug!("breadcrumb"; "no builder applies to {:?}", route.path());
        Breadcrumb::new()
    }
}

impl Default for BreadcrumbManager {
    fn default() -> Self {
        Self::with_defaults(BreadcrumbConfig::default())
    }
}
