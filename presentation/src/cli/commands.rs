//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a resolved outcome
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Colored human-readable output
    Text,
    /// JSON output (outcome or error)
    Json,
}

/// CLI arguments for oraculo
#[derive(Parser, Debug)]
#[command(name = "oraculo")]
#[command(author, version, about = "Ternary oracle for Spanish yes/no questions")]
#[command(long_about = r#"
Oraculo answers closed Spanish questions with Sí, No, or Tal vez, courtesy
of the yesno.wtf oracle.

A question must end with a question mark ("¿...?" or "...?"), must not offer
alternatives ("... o ..."), and must not be open-ended (qué, cómo, cuándo, ...).
Anything else is rejected before the oracle is consulted.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./oraculo.toml      Project-level config
3. ~/.config/oraculo/config.toml   Global config

Example:
  oraculo "¿Va a llover mañana?"
  oraculo --chat
  oraculo -o json "¿Será un día soleado?"
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the waiting spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_single_question() {
        let cli = Cli::parse_from(["oraculo", "¿Va a llover?"]);
        assert_eq!(cli.question.as_deref(), Some("¿Va a llover?"));
        assert!(!cli.chat);
    }

    #[test]
    fn chat_mode_needs_no_question() {
        let cli = Cli::parse_from(["oraculo", "--chat"]);
        assert!(cli.chat);
        assert!(cli.question.is_none());
    }

    #[test]
    fn verbosity_accumulates() {
        let cli = Cli::parse_from(["oraculo", "-vv", "hola?"]);
        assert_eq!(cli.verbose, 2);
    }
}
