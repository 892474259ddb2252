//! Presentation layer for oraculo
//!
//! This crate contains CLI definitions, the console output formatter,
//! the waiting spinner, and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::OracleRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::WaitingSpinner;
