//! Configuration file structure

use serde::{Deserialize, Serialize};

/// Default oracle endpoint (the public yesno.wtf API).
pub const DEFAULT_ENDPOINT: &str = "https://yesno.wtf/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Root of the `oraculo.toml` configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub oracle: OracleConfig,
    pub repl: ReplConfig,
}

/// `[oracle]` section: where and how to reach the oracle service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// URL queried for each accepted question.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `[repl]` section: interactive mode behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner while waiting for the oracle.
    pub show_spinner: bool,
    /// Persist readline history across sessions.
    pub save_history: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_spinner: true,
            save_history: true,
        }
    }
}
