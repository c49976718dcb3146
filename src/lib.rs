//! Crumbtrail - route-conditional breadcrumb building for content pipelines.
//!
//! A breadcrumb is assembled per request by a [`BreadcrumbManager`] that asks
//! registered [`BreadcrumbBuilder`]s, highest priority first, whether they
//! apply to the current [`RouteMatch`]. The first builder that applies owns
//! the trail. Every result carries [`cache`] metadata telling the rendering
//! layer what a cached trail varies by.
//!
//! # Example
//!
//! ```
//! use crumbtrail::breadcrumb::BreadcrumbManager;
//! use crumbtrail::config::BreadcrumbConfig;
//! use crumbtrail::route::RouteMatch;
//!
//! let manager = BreadcrumbManager::with_defaults(BreadcrumbConfig::default());
//!
//! // Node edit form gets the empty, route-varying breadcrumb.
//! let route = RouteMatch::new("entity.node.edit_form", "/node/42/edit");
//! let crumb = manager.build(&route);
//! assert!(crumb.links().is_empty());
//! ```

pub mod breadcrumb;
pub mod cache;
pub mod config;
pub mod core;
pub mod logger;
pub mod route;

pub use breadcrumb::{Breadcrumb, BreadcrumbBuilder, BreadcrumbManager};
pub use core::{Link, LinkTarget, Priority, UrlPath};
pub use route::RouteMatch;
