//! Operator front end for the keygate access key store
//!
//! Subcommands map one-to-one onto the store operations. Running without a
//! subcommand shows the interactive menu.

pub mod cli;

pub use cli::{Cli, Commands};

use clap::Parser;
use keygate_key::{KeyStore, KeyStoreConfig};

/// Entry point for the `keygate` binary
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let store = open_store(&cli)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Some(command) => cli::process_command(&store, command, cli.json, &mut stdout),
        None => cli::interactive::run_menu(&store, &mut stdout),
    }
}

/// Build the store from the command line
///
/// `--store-path` (or `KEYGATE_STORE`) wins over the `--config` file, which
/// wins over the defaults.
pub fn open_store(cli: &Cli) -> Result<KeyStore, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(config_path) => KeyStoreConfig::from_file(config_path)?,
        None => KeyStoreConfig::default(),
    };

    if let Some(store_path) = &cli.store_path {
        config = config.with_store_path(store_path);
    }

    Ok(KeyStore::try_new(config)?)
}
