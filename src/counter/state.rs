//! Counter state machine.
//!
//! ```text
//! Idle → Loading → Ready
//!                ↘ Error
//! ```
//!
//! `Ready` and `Error` are terminal for a mount.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterStatus {
    Idle,
    Loading,
    Ready,
    Error,
}

impl CounterStatus {
    /// Whether `next` is a legal transition from `self`.
    pub fn can_transition_to(self, next: CounterStatus) -> bool {
        matches!(
            (self, next),
            (CounterStatus::Idle, CounterStatus::Loading)
                | (CounterStatus::Loading, CounterStatus::Ready)
                | (CounterStatus::Loading, CounterStatus::Error)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, CounterStatus::Ready | CounterStatus::Error)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CounterStatus::Idle => "idle",
            CounterStatus::Loading => "loading",
            CounterStatus::Ready => "ready",
            CounterStatus::Error => "error",
        }
    }
}

impl fmt::Display for CounterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the widget currently shows: its status and the best known count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    pub status: CounterStatus,
    pub count: Option<u64>,
}

impl CounterSnapshot {
    /// Initial snapshot, seeded with the cached count if there is one.
    pub fn seeded(cached: Option<u64>) -> Self {
        Self {
            status: CounterStatus::Idle,
            count: cached,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        use CounterStatus::*;
        assert!(Idle.can_transition_to(Loading));
        assert!(Loading.can_transition_to(Ready));
        assert!(Loading.can_transition_to(Error));

        assert!(!Idle.can_transition_to(Ready));
        assert!(!Ready.can_transition_to(Loading));
        assert!(!Error.can_transition_to(Loading));
        assert!(!Loading.can_transition_to(Loading));

        assert!(Ready.is_terminal() && Error.is_terminal());
        assert!(!Idle.is_terminal() && !Loading.is_terminal());
    }

    #[test]
    fn test_seeded_snapshot() {
        let snap = CounterSnapshot::seeded(Some(41999));
        assert_eq!(snap.status, CounterStatus::Idle);
        assert_eq!(snap.count, Some(41999));
        assert_eq!(CounterSnapshot::seeded(None).count, None);
    }
}
