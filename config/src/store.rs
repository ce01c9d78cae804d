use std::fs;
use std::path::{Path, PathBuf};

use crate::{Configuration, Result};

/// Single source of truth for the process's [`Configuration`].
///
/// The store owns the file path and a lazily filled in-memory cache; callers
/// read the current value, mutate a copy and hand it back to [`save`].
/// Construct one store per process (or per test, over a scratch path).
///
/// [`save`]: ConfigStore::save
pub struct ConfigStore {
    path: PathBuf,
    cached: Option<Configuration>,
}

impl ConfigStore {
    /// A store over an explicit configuration file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), cached: None }
    }

    /// A store over the default path, `<home>/.logsh.json`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(crate::default_config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current configuration, loading it from disk on first call.
    ///
    /// A missing, unreadable or unparsable file is not an error: it means no
    /// prior configuration, so the default (empty) value is cached instead.
    /// Later calls never touch the disk again.
    pub fn current(&mut self) -> &Configuration {
        let path = &self.path;
        self.cached.get_or_insert_with(|| load_or_default(path))
    }

    /// Writes `config` to the configuration file, creating missing parent
    /// directories first. On success the cached value is replaced with
    /// `config`, so a following [`current`] observes what was saved.
    ///
    /// [`current`]: ConfigStore::current
    pub fn save(&mut self, config: &Configuration) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let serialized = serde_json::to_string(config)?;
        fs::write(&self.path, serialized)?;
        log::debug!("saved configuration to {}", self.path.display());

        self.cached = Some(config.clone());
        Ok(())
    }
}

fn load_or_default(path: &Path) -> Configuration {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::debug!("no configuration at {}: {err}", path.display());
            return Configuration::default();
        }
    };
    match serde_json::from_str(&contents) {
        Ok(config) => {
            log::debug!("loaded configuration from {}", path.display());
            config
        }
        Err(err) => {
            log::debug!("ignoring unparsable configuration at {}: {err}", path.display());
            Configuration::default()
        }
    }
}
