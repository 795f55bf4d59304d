//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::fs;

use prop_config::{ConfigProvider, ResourceLocator, RESOURCE_NAME};
use tempfile::TempDir;

/// Write `content` as the resource in a fresh directory.
pub fn resource_dir(content: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(RESOURCE_NAME), content).unwrap();
    dir
}

/// A provider reading from `dir`; the directory must outlive it.
pub fn provider_for(dir: &TempDir) -> ConfigProvider {
    ConfigProvider::new(ResourceLocator::in_dir(dir.path()))
}

#[allow(dead_code)]
pub fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
