//! Infrastructure layer for oraculo
//!
//! Adapters for the ports defined in the application layer: the HTTP
//! oracle gateway (yesno.wtf) and file-based configuration loading.

pub mod config;
pub mod oracle;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, OracleConfig, ReplConfig};
pub use oracle::YesNoGateway;
