//! Locating and reading the configuration resource.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::properties;
use crate::error::{ConfigError, LoadFailure};

/// Well-known name of the configuration resource.
pub const RESOURCE_NAME: &str = "config.properties";

/// Resolves [`RESOURCE_NAME`] against an ordered list of directories.
///
/// The first directory containing the resource wins.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    name: String,
    search_dirs: Vec<PathBuf>,
}

impl ResourceLocator {
    /// Search the given directories, in order, for [`RESOURCE_NAME`].
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            name: RESOURCE_NAME.to_string(),
            search_dirs,
        }
    }

    /// Search a single directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(vec![dir.into()])
    }

    /// Look for a differently named resource. Used by tooling and tests.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Candidate paths, in search order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.search_dirs.iter().map(|dir| dir.join(&self.name)).collect()
    }

    /// First existing candidate, if any.
    pub fn locate(&self) -> Option<PathBuf> {
        self.candidates().into_iter().find(|p| p.is_file())
    }

    /// Locate, read and parse the resource.
    pub fn load(&self) -> Result<(PathBuf, HashMap<String, String>), ConfigError> {
        let path = self.locate().ok_or_else(|| {
            ConfigError::load(
                &self.name,
                LoadFailure::NotFound {
                    searched: self.candidates(),
                },
            )
        })?;

        let values = read_properties(&path).map_err(|failure| ConfigError::load(&self.name, failure))?;
        Ok((path, values))
    }
}

impl Default for ResourceLocator {
    /// Current directory, then `./resources`, then the executable's directory.
    fn default() -> Self {
        let mut dirs = vec![PathBuf::from("."), PathBuf::from("resources")];
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            dirs.push(exe_dir);
        }
        Self::new(dirs)
    }
}

fn read_properties(path: &Path) -> Result<HashMap<String, String>, LoadFailure> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        // Removed between locate() and read.
        ErrorKind::NotFound => LoadFailure::NotFound {
            searched: vec![path.to_path_buf()],
        },
        _ => LoadFailure::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(properties::parse(&content)?)
}
