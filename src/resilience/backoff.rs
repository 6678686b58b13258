//! Linear backoff between attempts.

use std::time::Duration;

/// Delay to wait after the given (1-based) failed attempt.
///
/// Grows linearly: `attempt * step_ms`. Attempt 0 never waits.
pub fn calculate_backoff(attempt: u32, step_ms: u64) -> Duration {
    Duration::from_millis(step_ms.saturating_mul(u64::from(attempt)))
}
