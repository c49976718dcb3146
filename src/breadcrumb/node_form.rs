//! Breadcrumb override for the node add/edit forms.
//!
//! Content editing forms intentionally show no trail: the default path-based
//! trail would surface raw admin path segments (`/node/42/edit`) that mean
//! nothing to editors. This builder claims those two routes and returns an
//! empty trail that still varies by route, so cached renders of other routes
//! are unaffected.

use crate::breadcrumb::{Breadcrumb, BreadcrumbBuilder};
use crate::cache::CONTEXT_ROUTE;
use crate::route::RouteMatch;

/// Route name of the node creation form.
pub const NODE_ADD_ROUTE: &str = "node.add";

/// Route name of the node edit form.
pub const NODE_EDIT_FORM_ROUTE: &str = "entity.node.edit_form";

/// Suppresses the breadcrumb on node add/edit forms
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeFormBreadcrumbBuilder;

impl NodeFormBreadcrumbBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl BreadcrumbBuilder for NodeFormBreadcrumbBuilder {
    fn name(&self) -> &'static str {
        "node_form"
    }

    fn applies(&self, route: &RouteMatch) -> bool {
        matches!(
            route.route_name(),
            Some(NODE_ADD_ROUTE | NODE_EDIT_FORM_ROUTE)
        )
    }

    fn build(&self, _route: &RouteMatch) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();

        // No links on purpose. Without the route context every page would
        // share the same cached (empty) breadcrumb.
        breadcrumb.add_cache_contexts([CONTEXT_ROUTE]);

        breadcrumb
    }
}
