//! Runtime utilities shared by the zScanner HTTP handlers.
//!
//! # Architecture Overview
//!
//! ```text
//!     axum Router (external)
//!            │
//!            ▼
//!   ┌──────────────────┐    ┌────────────────┐    ┌──────────────┐
//!   │ http::service    │───▶│ error          │───▶│ RouteHandler │
//!   │ (Context build)  │    │ containment    │    │ (business)   │
//!   └──────────────────┘    └───────┬────────┘    └──────┬───────┘
//!                                   │                    │
//!                                   ▼                    ▼
//!                           observability::Logger   runtime (sleep, time,
//!                                                   callback bridge),
//!                                                   util (normalize, max)
//!
//!   config::ServerConfig: loaded once from the environment, read-only.
//! ```

// Core subsystems
pub mod config;
pub mod http;

// Helpers
pub mod runtime;
pub mod util;

// Cross-cutting concerns
pub mod observability;

pub use config::ServerConfig;
pub use http::{handler_fn, wrap_route_with_error_handler, Context, ContainedService, RouteHandler};
pub use observability::{Logger, TracingLogger};
