//! Process-wide provider for callers that want implicit singleton access.
//!
//! Prefer constructing a [`ConfigProvider`] at startup and passing it down;
//! this instance exists for code paths with nowhere to thread one through.
//! It uses [`ResourceLocator::default`] and loads on first lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::config::provider::ConfigProvider;
use crate::config::snapshot::ConfigSnapshot;
use crate::error::ConfigError;

static PROVIDER: LazyLock<ConfigProvider> = LazyLock::new(ConfigProvider::with_default_locator);

/// The process-wide provider.
pub fn provider() -> &'static ConfigProvider {
    &PROVIDER
}

pub fn get() -> Result<ConfigSnapshot, ConfigError> {
    PROVIDER.get()
}

pub fn set_properties(values: HashMap<String, String>) {
    PROVIDER.set_properties(values);
}

pub fn get_all_properties() -> Result<HashMap<String, String>, ConfigError> {
    PROVIDER.get_all_properties()
}

pub fn get_property(key: &str) -> Result<String, ConfigError> {
    PROVIDER.get_property(key)
}
