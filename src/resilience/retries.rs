//! Retry policy for one fetch cycle.
//!
//! Every failure kind is retried; only cancellation stops the loop early, and
//! that decision lives with the caller.

use std::time::Duration;

use crate::config::RetryConfig;
use crate::resilience::backoff::calculate_backoff;

/// Fixed attempt budget with linear backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    step_ms: u64,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, step_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            step_ms,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the next attempt, or `None` when `attempt` was the last one.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            None
        } else {
            Some(calculate_backoff(attempt, self.step_ms))
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, config.backoff_step_ms)
    }
}
