mod configuration;
mod error;
mod store;

pub use configuration::{Configuration, ConnectionInfo};
pub use error::Error;
pub use store::ConfigStore;

use std::path::PathBuf;

/// Name of the configuration file inside the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".logsh.json";

pub type Result<T> = std::result::Result<T, Error>;

/// Returns the default configuration file path, `<home>/.logsh.json`.
pub fn default_config_path() -> Result<PathBuf> {
    home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// `HOME` wins; `HOMEPATH` covers shells that only set the latter.
fn home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("HOMEPATH"))
        .map(PathBuf::from)
        .ok_or(Error::MissingHome)
}
