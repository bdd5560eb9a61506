//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber from the server configuration
//! - Define the logging collaborator used by request middleware
//! - Forward log records to `tracing` as structured events
//!
//! # Design Decisions
//! - Middleware depends on the `Logger` trait, not on a global subscriber
//! - `TracingLogger` renders record metadata as one JSON field on the event
//! - `init_logging` picks JSON output when NODE_ENV is production
//! - `DEBUG_LEVEL` sets this crate's level unless `RUST_LOG` is set

use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// A single log entry handed to a [`Logger`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub metadata: Map<String, Value>,
}

impl LogRecord {
    /// Create an info-level record.
    pub fn info(message: impl Into<String>, metadata: Map<String, Value>) -> Self {
        Self {
            level: Level::INFO,
            message: message.into(),
            metadata,
        }
    }
}

/// Sink for [`LogRecord`]s.
///
/// Implementations must tolerate interleaved calls from many requests.
pub trait Logger: Send + Sync {
    fn log(&self, record: &LogRecord);
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, record: &LogRecord) {
        (**self).log(record)
    }
}

/// Logger that emits every record as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, record: &LogRecord) {
        let metadata = Value::Object(record.metadata.clone());
        let message = record.message.as_str();

        match record.level {
            Level::ERROR => tracing::error!(%metadata, "{}", message),
            Level::WARN => tracing::warn!(%metadata, "{}", message),
            Level::INFO => tracing::info!(%metadata, "{}", message),
            Level::DEBUG => tracing::debug!(%metadata, "{}", message),
            _ => tracing::trace!(%metadata, "{}", message),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &ServerConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("zscanner_server={}", config.debug_level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).try_init()?;
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()?;
    }

    tracing::info!(
        node_env = %config.node_env,
        debug_level = %config.debug_level,
        "Logging initialized"
    );
    Ok(())
}
