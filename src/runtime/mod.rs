//! Async runtime helpers.
//!
//! # Data Flow
//! ```text
//! callback-style API
//!     → callback.rs (Callback handle → Deferred future)
//!     → sleep.rs (tokio timer task fires a bridged callback)
//!
//! any async operation
//!     → timer.rs (result + elapsed milliseconds)
//! ```
//!
//! # Design Decisions
//! - Nothing here is cancellable; callers race against `sleep` for timeouts
//! - Failures pass through unchanged; no recovery happens in this layer

pub mod callback;
pub mod sleep;
pub mod timer;

pub use callback::{with_callback, BridgeError, Callback, Deferred};
pub use sleep::sleep;
pub use timer::time;
