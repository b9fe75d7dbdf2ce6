//! CLI module for command-line interface functionality

pub mod commands;
pub mod interactive;
pub mod key_ops;

pub use commands::{Cli, Commands};

use keygate_key::{KeyGenerator, KeyStore};
use std::io::Write;

/// Process the CLI command
pub fn process_command<G: KeyGenerator>(
    store: &KeyStore<G>,
    command: Commands,
    use_json: bool,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Create { count } => key_ops::handle_create(store, count, use_json, out),
        Commands::List => key_ops::handle_list(store, use_json, out),
        Commands::Validate { key } => key_ops::handle_validate(store, &key, use_json, out),
    }
}
