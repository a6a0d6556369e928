//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check addresses, origins and log levels parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use axum::http::HeaderValue;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::Level;

use crate::config::schema::ServiceConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address is not a socket address: {0}")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("cors.allowed_origins contains an invalid origin: {0}")]
    CorsOrigin(String),

    #[error("observability.log_level is not a known level: {0}")]
    LogLevel(String),

    #[error("observability.metrics_address is not a socket address: {0}")]
    MetricsAddress(String),
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    for origin in &config.cors.allowed_origins {
        if origin == "*" || HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::CorsOrigin(origin.clone()));
        }
    }

    if config.observability.log_level.parse::<Level>().is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "verbose".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BindAddress("localhost".into()),
                ValidationError::ZeroRequestTimeout,
                ValidationError::LogLevel("verbose".into()),
            ]
        );
    }

    #[test]
    fn test_wildcard_origin_rejected() {
        // Origins are matched exactly; there is no wildcard form.
        let mut config = ServiceConfig::default();
        config.cors.allowed_origins = vec!["*".into()];
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::CorsOrigin("*".into())])
        );
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nope".into())])
        );
    }
}
