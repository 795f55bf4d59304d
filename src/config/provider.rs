//! Load-once configuration provider.
//!
//! # Concurrency
//! - Reads are lock-free loads of the current `Arc<ConfigSnapshot>`.
//! - First-time loads are serialized by `load_lock`; the loaded snapshot is
//!   published only if no snapshot appeared in the meantime, so concurrent
//!   first callers all observe the same snapshot.
//! - `set_properties` swaps the whole snapshot atomically and never blocks.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;

use crate::config::resource::ResourceLocator;
use crate::config::snapshot::ConfigSnapshot;
use crate::error::ConfigError;

/// Owner of the current configuration snapshot.
///
/// Construct one at startup and share it (e.g. behind an `Arc`). The resource
/// is read at most once unless [`reload`](Self::reload) is called.
#[derive(Debug)]
pub struct ConfigProvider {
    locator: ResourceLocator,
    current: ArcSwapOption<ConfigSnapshot>,
    load_lock: Mutex<()>,
}

impl ConfigProvider {
    /// Create a provider that loads lazily from `locator` on first use.
    pub fn new(locator: ResourceLocator) -> Self {
        Self {
            locator,
            current: ArcSwapOption::empty(),
            load_lock: Mutex::new(()),
        }
    }

    pub fn with_default_locator() -> Self {
        Self::new(ResourceLocator::default())
    }

    /// Create a provider and load the resource immediately.
    pub fn load(locator: ResourceLocator) -> Result<Self, ConfigError> {
        let provider = Self::new(locator);
        provider.get()?;
        Ok(provider)
    }

    /// Create a provider seeded with `values`; no resource is read.
    pub fn from_properties(values: HashMap<String, String>) -> Self {
        let provider = Self::with_default_locator();
        provider.set_properties(values);
        provider
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }

    /// Whether a snapshot is currently held.
    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }

    /// Current snapshot, loading it from the resource if none is held yet.
    ///
    /// A failed load is not cached; the next call tries again.
    pub fn get(&self) -> Result<ConfigSnapshot, ConfigError> {
        if let Some(snapshot) = self.current.load_full() {
            return Ok(snapshot.as_ref().clone());
        }

        let _guard = self.load_lock.lock();
        if let Some(snapshot) = self.current.load_full() {
            return Ok(snapshot.as_ref().clone());
        }

        let fresh = Arc::new(self.read_resource()?);
        let previous = self
            .current
            .rcu(|current| current.clone().or_else(|| Some(Arc::clone(&fresh))));

        // A concurrent set_properties wins over the freshly loaded snapshot.
        let published = previous.unwrap_or(fresh);
        Ok(published.as_ref().clone())
    }

    /// Replace the current snapshot with `values`, loaded or not.
    pub fn set_properties(&self, values: HashMap<String, String>) {
        let snapshot = ConfigSnapshot::new(values);
        tracing::debug!(keys = snapshot.len(), "Configuration snapshot replaced");
        self.current.store(Some(Arc::new(snapshot)));
    }

    /// Copy of every key/value pair in the current snapshot.
    pub fn get_all_properties(&self) -> Result<HashMap<String, String>, ConfigError> {
        Ok(self.get()?.to_map())
    }

    /// Value for `key`.
    ///
    /// Absent keys and blank values both fail with
    /// [`ConfigError::MissingKey`]; a blank value is never returned.
    pub fn get_property(&self, key: &str) -> Result<String, ConfigError> {
        let snapshot = self.get()?;
        snapshot
            .get_non_blank(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::missing_key(key))
    }

    /// Re-read the resource and replace the current snapshot.
    ///
    /// On failure the current snapshot, if any, is kept.
    pub fn reload(&self) -> Result<ConfigSnapshot, ConfigError> {
        let _guard = self.load_lock.lock();
        let snapshot = self.read_resource()?;
        self.current.store(Some(Arc::new(snapshot.clone())));
        Ok(snapshot)
    }

    fn read_resource(&self) -> Result<ConfigSnapshot, ConfigError> {
        match self.locator.load() {
            Ok((path, values)) => {
                tracing::info!(
                    path = %path.display(),
                    keys = values.len(),
                    "Configuration loaded"
                );
                Ok(ConfigSnapshot::loaded_from(values, path))
            }
            Err(e) => {
                tracing::warn!(resource = %self.locator.name(), error = %e, "Failed to load configuration");
                Err(e)
            }
        }
    }
}
