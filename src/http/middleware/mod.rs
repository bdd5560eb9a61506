//! Request middleware.

pub mod error_containment;

pub use error_containment::{
    contain_failure, wrap_route_with_error_handler, ErrorContained, HandlerPanic,
};
