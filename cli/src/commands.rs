pub mod connect;

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};
use logsh_config::{ConfigStore, Configuration};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Connect to a logship server
    Connect {
        /// Server endpoint, e.g. 10.0.0.1:9000
        server: String,
    },

    /// Forget a configured server
    Disconnect {
        /// Server endpoint to forget
        server: String,
    },

    /// List the configured servers
    #[clap(alias = "ls")]
    Connections {
        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<OutputMode>,
    },

    /// Inspect this client's configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the configuration file path
    Path {
        /// Exit with an error unless the file exists
        #[arg(long)]
        exists: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputMode {
    /// One endpoint per line
    #[default]
    Plain,
    /// JSON array of connections
    Json,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Config(logsh_config::Error),
    MissingConfig(PathBuf),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::MissingConfig(path) => {
                write!(f, "no configuration file at {}", path.display())
            }
            Self::Io(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "{e}"),
        }
    }
}

impl From<logsh_config::Error> for Error {
    fn from(value: logsh_config::Error) -> Self {
        Error::Config(value)
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value)
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value)
    }
}

pub fn execute(command: &Commands, config_override: Option<&Path>) -> Result<()> {
    let mut store = match config_override {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::from_env()?,
    };

    match command {
        Commands::Connect { server } => connect::add(&mut store, server),
        Commands::Disconnect { server } => connect::remove(&mut store, server),
        Commands::Connections { output } => connect::list(&mut store, *output, std::io::stdout()),
        Commands::Config { command } => match command {
            ConfigCommands::Path { exists } => config_path(&store, *exists),
        },
    }
}

fn config_path(store: &ConfigStore, must_exist: bool) -> Result<()> {
    if must_exist && !store.path().exists() {
        return Err(Error::MissingConfig(store.path().to_owned()));
    }
    println!("{}", store.path().display());
    Ok(())
}

/// Persists `config`, reporting failure without failing the command.
fn save_or_warn(store: &mut ConfigStore, config: &Configuration) -> bool {
    match store.save(config) {
        Ok(()) => true,
        Err(err) => {
            eprintln!(
                "warning: could not save configuration to {}: {err}",
                store.path().display()
            );
            false
        }
    }
}
