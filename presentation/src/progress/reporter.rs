//! Waiting indicator for the in-flight oracle call

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Fixed waiting message shown while the oracle call is in flight.
pub const WAITING_MESSAGE: &str = "Esperando la respuesta...";

/// A spinner shown while exactly one oracle call is in flight.
///
/// Dropping the spinner clears it; [`WaitingSpinner::finish`] does so
/// explicitly. With `enabled = false` (quiet mode) it renders nothing.
pub struct WaitingSpinner {
    bar: Option<ProgressBar>,
}

impl WaitingSpinner {
    pub fn start(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(WAITING_MESSAGE);
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Stop the spinner and clear its line.
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
