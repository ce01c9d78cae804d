mod commands;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file to use instead of the one in your home directory
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity, may be repeated
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> commands::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    commands::execute(&cli.command, cli.config.as_deref())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}
