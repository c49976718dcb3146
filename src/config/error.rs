//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_display() {
        let err = ConfigError::Io(
            PathBuf::from("breadcrumb.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("breadcrumb.toml"));
    }
}
