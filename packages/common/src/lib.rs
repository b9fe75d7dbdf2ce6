//! Common infrastructure shared by the keygate crates
//!
//! Currently this is the logging layer: `env_logger` initialisation and
//! helpers that keep access keys out of log output.

pub mod logging;

pub use logging::LoggingTransformer;
