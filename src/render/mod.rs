//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! CounterSnapshot (watch channel)
//!     → spring.rs retargets on every new count
//!     → CounterView::new(status, animated value)
//!     → terminal.rs draws a frame per tick, then the final card
//! driver.rs owns the frame loop for one mount
//! ```

pub mod driver;
pub mod spring;
pub mod terminal;

pub use driver::drive;
pub use spring::Spring;
pub use terminal::TerminalRenderer;
