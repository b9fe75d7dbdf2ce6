//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "keygate")]
#[command(about = "Issue, list, and redeem single-use access keys")]
pub struct Cli {
    /// Path to the key record (default: ./access_keys.json)
    #[arg(long, env = "KEYGATE_STORE", global = true)]
    pub store_path: Option<PathBuf>,

    /// JSON configuration file for the key store
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Generate new access keys
    ///
    /// Every key is 16 uppercase letters and is added to the active set.
    ///
    /// Example usage:
    ///   keygate create
    ///   keygate create 10
    Create {
        /// Number of keys to generate
        #[arg(default_value_t = 1)]
        count: usize,
    },

    /// List active and used keys
    List,

    /// Validate and activate a key
    ///
    /// A valid key is moved to the used set and cannot be activated again.
    Validate {
        /// The access key to redeem
        key: String,
    },
}
