//! Visitor counter library.
//!
//! Fetches a hit count from a remote counting endpoint with retries, keeps the
//! last known value in local storage, and exposes a renderable view of it.

pub mod config;
pub mod counter;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod resilience;
pub mod storage;

pub use config::CounterConfig;
pub use counter::{CountClient, CounterStatus, CounterView, CycleOutcome, Mount, VisitorCounter};
pub use lifecycle::CancelToken;
pub use storage::LocalStore;
