//! The two-method builder contract dispatched by the manager.

use crate::breadcrumb::Breadcrumb;
use crate::route::RouteMatch;

/// A breadcrumb source for some subset of routes
///
/// The manager consults builders in priority order; the first one whose
/// [`applies`](Self::applies) returns true builds the trail for the request.
/// Both methods are pure functions of the route match.
pub trait BreadcrumbBuilder: Send + Sync {
    /// Short machine name, used in debug logging.
    fn name(&self) -> &'static str;

    /// Whether this builder owns the breadcrumb for the given route.
    ///
    /// Side-effect free. A missing route name is a normal negative answer,
    /// not an error.
    fn applies(&self, route: &RouteMatch) -> bool;

    /// Build the trail for a route this builder applies to.
    ///
    /// Only called after [`applies`](Self::applies) returned true for the
    /// same route. Total: cannot fail for any valid route match.
    fn build(&self, route: &RouteMatch) -> Breadcrumb;
}
