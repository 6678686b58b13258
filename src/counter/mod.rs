//! Visitor counter component.
//!
//! # Data Flow
//! ```text
//! VisitorCounter::new   → storage: read cached count, seed snapshot (Idle)
//! VisitorCounter::mount → spawn fetch cycle with a fresh CancelToken
//!     fetch cycle:
//!         Loading
//!         → client.rs (GET, no caching, per-attempt timeout)
//!         → payload.rs (primary field, then fallback)
//!         → failure: backoff and retry until the budget is spent → Error
//!         → success: update count, persist, → Ready
//! display.rs turns the current snapshot into a CounterView
//! ```
//!
//! # Design Decisions
//! - Failures never clear a known count
//! - Cancellation is an outcome, not an error; it leaves state and storage alone
//! - One fetch cycle per mount, no polling

pub mod client;
pub mod display;
pub mod payload;
pub mod state;
pub mod widget;

use std::time::Duration;

use thiserror::Error;

pub use client::CountClient;
pub use display::{format_count, AuxMessage, CounterView, PLACEHOLDER};
pub use state::{CounterSnapshot, CounterStatus};
pub use widget::{CycleOutcome, Mount, VisitorCounter};

/// Why a single attempt failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or body transfer failure.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing numeric count in response payload (checked `{primary}` then `{fallback}`)")]
    MissingCount { primary: String, fallback: String },

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FetchError {
    /// Coarse class used for metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) | FetchError::InvalidUrl(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Timeout(_) => "timeout",
            FetchError::InvalidJson(_) | FetchError::MissingCount { .. } => "payload",
        }
    }
}
