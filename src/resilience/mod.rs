//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Attempt against the counting endpoint:
//!     → timeouts.rs (per-attempt deadline)
//!     → On failure: retries.rs (attempt budget left?)
//!     → backoff.rs (linear delay before the next attempt)
//! ```
//!
//! # Design Decisions
//! - Every external call has a deadline
//! - Retries are strictly sequential, never overlapping
//! - Backoff is linear and deterministic, no jitter

pub mod backoff;
pub mod retries;
pub mod timeouts;

pub use retries::RetryPolicy;
