//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! Every field has a default so an empty environment still yields a usable
//! configuration.

use serde::Serialize;
use std::fmt;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 10805;

/// Default router mount prefix.
pub const DEFAULT_ROUTER_PREFIX: &str = "/api-zscanner";

/// Root configuration for the server.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,

    /// Deployment environment ("development", "production", ...).
    pub node_env: String,

    /// Log level directive for this crate (trace, debug, info, warn, error).
    pub debug_level: String,

    /// Require clients to present a valid client tag.
    pub verify_client_tag: bool,

    /// Seacat identity service settings.
    pub seacat: SeacatConfig,

    /// Name of the authenticator backend to use.
    pub authenticator: String,

    /// Name of the document storage backend to use.
    pub document_storage: String,

    /// Prefix every route is mounted under.
    pub router_prefix: String,
}

impl ServerConfig {
    /// Whether the server runs in production mode.
    pub fn is_production(&self) -> bool {
        self.node_env == "production"
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            node_env: "development".to_string(),
            debug_level: "debug".to_string(),
            verify_client_tag: false,
            seacat: SeacatConfig::default(),
            authenticator: "none".to_string(),
            document_storage: "demo".to_string(),
            router_prefix: DEFAULT_ROUTER_PREFIX.to_string(),
        }
    }
}

/// Seacat identity service connection settings.
#[derive(Clone, Default, Serialize, PartialEq, Eq)]
pub struct SeacatConfig {
    pub endpoint: Option<String>,
    pub username: Option<String>,

    #[serde(skip_serializing)]
    pub password: Option<String>,
}

impl fmt::Debug for SeacatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeacatConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
