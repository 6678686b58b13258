//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Fetch cycle produces:
//!     → logging.rs (structured events, mount_id span field)
//!     → metrics.rs (attempt/cycle counters, latency, last count)
//!
//! Consumers:
//!     → stderr log stream
//!     → Prometheus text dump on exit (--print-metrics)
//! ```

pub mod logging;
pub mod metrics;
