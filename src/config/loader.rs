//! Configuration loading from the process environment.

use thiserror::Error;

use crate::config::schema::{SeacatConfig, ServerConfig, DEFAULT_PORT};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ServerConfig {
    /// Load and validate configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        load_from(|key| std::env::var(key).ok())
    }
}

/// Load and validate configuration from an arbitrary variable lookup.
///
/// Empty values are treated as unset.
pub fn load_from<F>(lookup: F) -> Result<ServerConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let defaults = ServerConfig::default();

    let config = ServerConfig {
        port: var("PORT")
            .and_then(|raw| parse_port(&raw))
            .unwrap_or(DEFAULT_PORT),
        node_env: var("NODE_ENV").unwrap_or(defaults.node_env),
        debug_level: var("DEBUG_LEVEL").unwrap_or(defaults.debug_level),
        verify_client_tag: var("VERIFY_CLIENT_TAG")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false),
        seacat: SeacatConfig {
            endpoint: var("SEACAT_ENDPOINT"),
            username: var("SEACAT_USERNAME"),
            password: var("SEACAT_PASSWORD"),
        },
        authenticator: var("ZSCANNER_AUTHENTICATOR")
            .or_else(|| var("AUTHENTICATOR"))
            .unwrap_or(defaults.authenticator),
        document_storage: var("ZSCANNER_STORAGE")
            .or_else(|| var("DOCUMENT_STORAGE"))
            .unwrap_or(defaults.document_storage),
        router_prefix: var("ROUTER_PREFIX").unwrap_or(defaults.router_prefix),
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        port = config.port,
        node_env = %config.node_env,
        authenticator = %config.authenticator,
        document_storage = %config.document_storage,
        router_prefix = %config.router_prefix,
        "Configuration loaded"
    );

    Ok(config)
}

/// Parse the leading decimal digits of `raw`; zero or no digits yields `None`.
fn parse_port(raw: &str) -> Option<u16> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    match trimmed[..end].parse::<u16>() {
        Ok(0) | Err(_) => {
            tracing::warn!(value = %raw, default = DEFAULT_PORT, "Ignoring unusable PORT");
            None
        }
        Ok(port) => Some(port),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
