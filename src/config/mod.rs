//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → CounterConfig (validated, immutable)
//!     → handed to storage, client and renderer at mount
//! ```
//!
//! # Design Decisions
//! - All fields have defaults, so no file is needed at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AnimationConfig, CounterConfig, EndpointConfig, ObservabilityConfig, RetryConfig,
    StorageConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
