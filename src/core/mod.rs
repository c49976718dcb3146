//! Core types - pure abstractions shared across the codebase.

mod link;
mod priority;
mod url;

pub use link::{Link, LinkTarget};
pub use priority::Priority;
pub use url::UrlPath;
