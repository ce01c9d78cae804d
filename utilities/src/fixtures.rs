use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway home directory for tests that touch the configuration file.
pub struct TempHome {
    home: TempDir,
}

impl TempHome {
    pub fn new() -> Self {
        Self { home: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.home.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.path().join(".logsh.json")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).unwrap();
    }

    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap()
    }
}

impl Default for TempHome {
    fn default() -> Self {
        Self::new()
    }
}
