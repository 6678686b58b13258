//! Configuration validation.
//!
//! Serde handles syntax; this pass checks values. Every problem is collected so
//! a bad file is reported in one go.

use thiserror::Error;
use url::Url;

use crate::config::schema::CounterConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("endpoint.url is not a valid URL: {0}")]
    InvalidUrl(String),

    #[error("endpoint.url must use http or https, got {0}")]
    UnsupportedScheme(String),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("endpoint.primary_field and endpoint.fallback_field must differ")]
    DuplicateField,

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

/// Validate a parsed configuration.
pub fn validate_config(config: &CounterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string())),
        Err(e) => errors.push(ValidationError::InvalidUrl(e.to_string())),
    }

    if config.endpoint.primary_field.is_empty() {
        errors.push(ValidationError::Empty("endpoint.primary_field"));
    }
    if config.endpoint.fallback_field.is_empty() {
        errors.push(ValidationError::Empty("endpoint.fallback_field"));
    }
    if !config.endpoint.primary_field.is_empty()
        && config.endpoint.primary_field == config.endpoint.fallback_field
    {
        errors.push(ValidationError::DuplicateField);
    }

    if config.storage.key.is_empty() {
        errors.push(ValidationError::Empty("storage.key"));
    }

    if config.retry.max_attempts == 0 {
        errors.push(ValidationError::NotPositive { field: "retry.max_attempts" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::NotPositive { field: "timeouts.request_secs" });
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::NotPositive { field: "timeouts.connect_secs" });
    }

    let spring = [
        ("animation.stiffness", config.animation.stiffness),
        ("animation.damping", config.animation.damping),
        ("animation.mass", config.animation.mass),
    ];
    for (field, value) in spring {
        if !value.is_finite() || value <= 0.0 {
            errors.push(ValidationError::NotPositive { field });
        }
    }
    if config.animation.frame_ms == 0 {
        errors.push(ValidationError::NotPositive { field: "animation.frame_ms" });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
