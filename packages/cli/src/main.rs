//! Main entry point for the keygate CLI application

use keygate_common::LoggingTransformer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    LoggingTransformer::init();

    keygate_cli::run()
}
