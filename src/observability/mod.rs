//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request middleware (error containment)
//!     → LogRecord (message + JSON metadata)
//!     → Logger (TracingLogger in production, recording loggers in tests)
//!     → tracing subscriber (fmt or JSON, see logging.rs)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing in production
//! - Middleware logs through the `Logger` trait so tests can observe records

pub mod logging;

pub use logging::{init_logging, LogRecord, Logger, LoggingError, TracingLogger};
