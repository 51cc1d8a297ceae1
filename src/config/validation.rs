//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "rpc.timeout_secs").
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address".to_string(),
            message: format!("not a valid socket address: '{}'", config.listener.bind_address),
        });
    }

    if config.rpc.backend_address.is_empty() {
        errors.push(ValidationError {
            field: "rpc.backend_address".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if config.rpc.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "rpc.timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address".to_string(),
            message: format!(
                "not a valid socket address: '{}'",
                config.observability.metrics_address
            ),
        });
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
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.rpc.backend_address = String::new();
        config.rpc.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.field == "rpc.timeout_secs"));
    }

    #[test]
    fn zero_request_timeout_rejected() {
        let mut config = GatewayConfig::default();
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "timeouts.request_secs");
    }
}
