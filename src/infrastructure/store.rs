//! Configuration persistence

use crate::domain::Config;
use crate::error::{AutotagError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract storage for the rule configuration
///
/// The engine only reads and writes the opaque rule text; where and how it
/// is stored is up to the implementation.
pub trait ConfigStore {
    /// Load the stored configuration, or `None` when nothing is stored yet
    fn load(&self) -> Result<Option<Config>>;

    /// Persist the configuration
    fn save(&self, config: &Config) -> Result<()>;
}

/// File-backed store keeping the configuration as a TOML document
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileConfigStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Option<Config>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AutotagError::Io(e)),
        };

        let config = toml::from_str(&contents).map_err(|e| {
            AutotagError::Config(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        Ok(Some(config))
    }

    fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(config)
            .map_err(|e| AutotagError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&self.path, contents)?;

        Ok(())
    }
}
