//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntax and defaults)
//! - Check that the selected authenticator has the settings it needs
//! - Validate value formats (router prefix, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ROUTER_PREFIX must start with '/', got {0:?}")]
    RouterPrefix(String),

    #[error("DEBUG_LEVEL {0:?} is not a log level")]
    DebugLevel(String),

    #[error("authenticator {authenticator:?} requires SEACAT_ENDPOINT")]
    MissingSeacatEndpoint { authenticator: String },
}

/// Check a loaded configuration for semantic errors.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.router_prefix.starts_with('/') {
        errors.push(ValidationError::RouterPrefix(config.router_prefix.clone()));
    }

    if config.debug_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::DebugLevel(config.debug_level.clone()));
    }

    if config.authenticator == "seacat" && config.seacat.endpoint.is_none() {
        errors.push(ValidationError::MissingSeacatEndpoint {
            authenticator: config.authenticator.clone(),
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
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ServerConfig::default();
        config.router_prefix = "api".into();
        config.debug_level = "loud".into();
        config.authenticator = "seacat".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], ValidationError::RouterPrefix("api".into()));
        assert_eq!(errors[1], ValidationError::DebugLevel("loud".into()));
    }

    #[test]
    fn test_seacat_with_endpoint() {
        let mut config = ServerConfig::default();
        config.authenticator = "seacat".into();
        config.seacat.endpoint = Some("https://seacat.example".into());
        assert!(validate_config(&config).is_ok());
    }
}
