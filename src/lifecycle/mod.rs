//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Mount:
//!     CancelToken::new() → shared by every attempt and backoff of the mount
//!
//! Unmount (explicit, handle dropped, or SIGINT via signals.rs):
//!     token.cancel() → pending suspension point resolves to None
//!                    → fetch cycle returns without touching state or storage
//! ```
//!
//! # Design Decisions
//! - One token per mount, never reused
//! - Cancellation is a lifecycle event, not an error

pub mod cancel;
pub mod signals;

pub use cancel::CancelToken;
