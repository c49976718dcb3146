//! Breadcrumb configuration.
//!
//! # Example
//!
//! ```toml
//! include_current = false
//!
//! [front]
//! label = "Home"
//! path = "/"
//! ```

mod error;

pub use error::ConfigError;

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration for breadcrumb assembly
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// Front-page link placed at the start of path-based trails.
    pub front: FrontPageConfig,

    /// Whether path-based trails include the current page as the last
    /// (unlinked-by-convention) entry.
    pub include_current: bool,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            front: FrontPageConfig::default(),
            include_current: false,
        }
    }
}

impl BreadcrumbConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Front-page link settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontPageConfig {
    /// Display label of the front-page crumb.
    pub label: String,

    /// Site-relative path of the front page.
    pub path: String,
}

impl Default for FrontPageConfig {
    fn default() -> Self {
        Self {
            label: "Home".to_string(),
            path: "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BreadcrumbConfig::default();
        assert_eq!(config.front.label, "Home");
        assert_eq!(config.front.path, "/");
        assert!(!config.include_current);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "include_current = true").unwrap();
        writeln!(file, "[front]").unwrap();
        writeln!(file, "label = \"Start\"").unwrap();

        let config = BreadcrumbConfig::load(file.path()).unwrap();
        assert!(config.include_current);
        assert_eq!(config.front.label, "Start");
        // Unset fields keep their defaults
        assert_eq!(config.front.path, "/");
    }

    #[test]
    fn test_load_missing_file() {
        let err = BreadcrumbConfig::load(Path::new("/nonexistent/breadcrumb.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "include_current = [not toml").unwrap();

        let err = BreadcrumbConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
