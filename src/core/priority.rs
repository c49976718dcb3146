//! Priority levels for breadcrumb builder dispatch.

/// Dispatch priority for a registered breadcrumb builder
///
/// Higher value = consulted earlier by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Catch-all builders that apply to any route - consulted last
    Fallback = 0,
    /// Ordinary builders
    Normal = 1,
    /// Route-specific overrides - consulted first
    Override = 2,
}
