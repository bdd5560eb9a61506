//! HTTP handler plumbing subsystem.
//!
//! # Data Flow
//! ```text
//! axum Router (external, mounts the service under ROUTER_PREFIX)
//!     → service.rs (buffer body, build Context)
//!     → middleware/error_containment.rs (run handler, contain failures)
//!     → handler.rs (business-logic RouteHandler)
//!     → context.rs (ResponseState → axum Response)
//!     → Send to client
//! ```

pub mod context;
pub mod handler;
pub mod middleware;
pub mod service;

pub use context::{Context, RequestContext, ResponseState};
pub use handler::{handler_fn, HandlerFn, RouteHandler};
pub use middleware::{wrap_route_with_error_handler, ErrorContained};
pub use service::ContainedService;
