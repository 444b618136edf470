//! Client runtime configuration.
//!
//! DESIGN
//! ======
//! A single `AppConfig` value is provided as context by `App`. It decides
//! whether the interview backend is attempted at all and how long the
//! simulated generation steps take. Nothing reads it from the environment;
//! the defaults are the shipped behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use prep::{SourceMode, TimeoutPolicy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Whether `FallbackSource` tries the HTTP backend first.
    pub source_mode: SourceMode,
    /// What the session countdown does when it reaches zero.
    pub timeout_policy: TimeoutPolicy,
    /// Simulated latency before a problem or question set appears.
    pub generation_delay_ms: u64,
    /// Simulated latency of the test runner.
    pub run_delay_ms: u64,
    /// Simulated latency of the room interviewer.
    pub reply_delay_ms: u64,
    /// Length of the dashboard recent-activity feed.
    pub recent_activity_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_mode: SourceMode::Remote,
            timeout_policy: TimeoutPolicy::Advisory,
            generation_delay_ms: 2000,
            run_delay_ms: 1500,
            reply_delay_ms: 1500,
            recent_activity_limit: 5,
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    #[must_use]
    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }

    #[must_use]
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}
