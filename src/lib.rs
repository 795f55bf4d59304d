//! Load-once properties configuration with fail-fast lookups.

pub mod config;
pub mod error;
pub mod observability;

pub use config::{ConfigProvider, ConfigSnapshot, ResourceLocator, RESOURCE_NAME};
pub use error::{ConfigError, LoadFailure, ParseError};
