//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the counter.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the visitor counter.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CounterConfig {
    /// Remote counting endpoint and payload field names.
    pub endpoint: EndpointConfig,

    /// Where the last known count is kept.
    pub storage: StorageConfig,

    /// Retry configuration.
    pub retry: RetryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Spring animation used by the renderer.
    pub animation: AnimationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Counting endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// URL hit once per attempt (the service increments on every call).
    pub url: String,

    /// Payload field checked first for the count.
    pub primary_field: String,

    /// Payload field used when the primary one holds no usable number.
    pub fallback_field: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: "https://api.countapi.xyz/hit/madebyraf.tech/visits".to_string(),
            primary_field: "value".to_string(),
            fallback_field: "count".to_string(),
        }
    }
}

/// Persistent storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key the cached count is stored under.
    pub key: String,

    /// Storage file. `None` resolves to the user's data directory.
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: "madebyraf:visitor-count".to_string(),
            path: None,
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per fetch cycle, including the first.
    pub max_attempts: u32,

    /// Linear backoff step; the wait after attempt `n` is `n * step`.
    pub backoff_step_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step_ms: 500,
        }
    }
}

/// Timeout configuration for a single attempt.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Total time for one request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 10,
        }
    }
}

/// Spring animation parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,

    /// Frame interval for the terminal renderer in milliseconds.
    pub frame_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stiffness: 110.0,
            damping: 18.0,
            mass: 1.0,
            frame_ms: 16,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "visitor_counter=info".to_string(),
        }
    }
}
