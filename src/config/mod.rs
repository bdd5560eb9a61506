//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (read once at startup)
//!     → loader.rs (lookup, defaults, parsing)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → passed by reference / Arc to whatever needs it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; nothing re-reads the environment
//! - All fields have defaults so an empty environment is valid
//! - Validation separates parsing from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from, ConfigError};
pub use schema::{SeacatConfig, ServerConfig};
pub use validation::ValidationError;
