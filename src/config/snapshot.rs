//! Immutable configuration snapshot.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// All configuration visible to the application at a point in time.
///
/// Contents never change after construction; cloning shares the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    values: Arc<HashMap<String, String>>,
    source: Option<Arc<PathBuf>>,
}

impl ConfigSnapshot {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values: Arc::new(values),
            source: None,
        }
    }

    /// Snapshot parsed from the resource at `path`.
    pub fn loaded_from(values: HashMap<String, String>, path: PathBuf) -> Self {
        Self {
            values: Arc::new(values),
            source: Some(Arc::new(path)),
        }
    }

    /// File this snapshot was read from; `None` if it was supplied directly.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref().map(PathBuf::as_path)
    }

    /// Raw value for `key`, blank values included.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key` if present and not blank.
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Owned copy of the full mapping.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.values.as_ref().clone()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_hidden_from_non_blank_lookup() {
        let snapshot: ConfigSnapshot = [("host", "localhost"), ("port", ""), ("user", "   ")]
            .into_iter()
            .collect();

        assert_eq!(snapshot.get_non_blank("host"), Some("localhost"));
        assert_eq!(snapshot.get("port"), Some(""));
        assert_eq!(snapshot.get_non_blank("port"), None);
        assert_eq!(snapshot.get_non_blank("user"), None);
        assert_eq!(snapshot.get_non_blank("missing"), None);
        assert!(snapshot.contains_key("port"));
    }

    #[test]
    fn test_to_map_is_independent_copy() {
        let snapshot: ConfigSnapshot = [("a", "1")].into_iter().collect();
        let mut copy = snapshot.to_map();
        copy.insert("b".into(), "2".into());

        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.contains_key("b"));
    }

    #[test]
    fn test_source_recorded_only_for_loaded_snapshots() {
        let supplied: ConfigSnapshot = [("a", "1")].into_iter().collect();
        assert_eq!(supplied.source(), None);

        let loaded = ConfigSnapshot::loaded_from(supplied.to_map(), PathBuf::from("conf/config.properties"));
        assert_eq!(loaded.source(), Some(Path::new("conf/config.properties")));
    }
}
