//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, OracleConfig, ReplConfig};
pub use loader::ConfigLoader;
