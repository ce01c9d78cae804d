//! Shared fixture for the logsh command line tests.
//!
//! Each integration test binary compiles this file on its own, so not every
//! helper is used from every binary, hence the `allow(dead_code)`.
#![cfg(test)]
#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use utilities::fixtures::TempHome;

pub struct TestHome {
    home: TempHome,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    pub fn new() -> Self {
        Self { home: TempHome::new() }
    }

    pub fn config_path(&self) -> PathBuf {
        self.home.config_path()
    }

    pub fn write_config(&self, contents: &str) {
        self.home.write_config(contents);
    }

    pub fn read_config(&self) -> String {
        self.home.read_config()
    }

    /// A `logsh` command whose home directory is this fixture.
    pub fn command(&self) -> Command {
        let mut cmd = logsh();
        cmd.env("HOME", self.home.path());
        cmd
    }

    /// Same, but the home directory is only reachable through `HOMEPATH`.
    pub fn command_via_homepath(&self) -> Command {
        let mut cmd = logsh();
        cmd.env("HOMEPATH", self.home.path());
        cmd
    }
}

/// A `logsh` command with no home directory in its environment.
pub fn logsh() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("logsh");
    cmd.env_remove("HOME").env_remove("HOMEPATH").env_remove("RUST_LOG");
    cmd
}
