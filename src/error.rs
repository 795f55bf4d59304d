//! Error types for configuration access.
//!
//! Two kinds only: the backing resource could not be loaded, or a requested
//! key is not set. Lookups never substitute defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`ConfigProvider`](crate::config::ConfigProvider).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The resource could not be located, read or parsed.
    #[error("could not load properties file {resource}")]
    Load {
        resource: String,
        #[source]
        source: LoadFailure,
    },

    /// The key is absent or maps to a blank value.
    #[error("{key} not set")]
    MissingKey { key: String },
}

impl ConfigError {
    pub(crate) fn load(resource: &str, source: LoadFailure) -> Self {
        ConfigError::Load {
            resource: resource.to_string(),
            source,
        }
    }

    pub(crate) fn missing_key(key: &str) -> Self {
        ConfigError::MissingKey {
            key: key.to_string(),
        }
    }
}

/// Underlying cause of a [`ConfigError::Load`].
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("not found in any of: {}", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A syntax error in properties content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    /// 1-based line number where the offending logical line starts.
    pub line: usize,
    pub message: String,
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "<no search directories>".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
