//! Error containment for route handlers.
//!
//! # Responsibilities
//! - Run the wrapped handler exactly once per request
//! - Turn any handler failure (error or panic) into a 500 response
//! - Record the failure once through the logging collaborator
//!
//! # Design Decisions
//! - The wrapped handler's error type is `Infallible`: nothing escapes
//! - Response is mutated before the log record is emitted
//! - Successful requests are left untouched and are not logged

use futures_util::future::{BoxFuture, FutureExt};
use serde_json::{Map, Value};
use std::any::Any;
use std::convert::Infallible;
use std::fmt::{Debug, Display};
use std::panic::AssertUnwindSafe;
use thiserror::Error;

use crate::http::context::RequestContext;
use crate::http::handler::RouteHandler;
use crate::observability::logging::{LogRecord, Logger};

/// A handler panicked instead of returning.
#[derive(Debug, Error)]
#[error("handler panicked: {0}")]
pub struct HandlerPanic(pub String);

impl HandlerPanic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "unknown panic payload".to_string(),
            },
        };
        Self(message)
    }
}

/// A handler whose failures are contained. See [`wrap_route_with_error_handler`].
#[derive(Debug, Clone)]
pub struct ErrorContained<H, L> {
    handler: H,
    logger: L,
}

/// Wrap `handler` so that it never fails.
///
/// On failure the response becomes `500` with message `"Error: {err}"` and
/// one info record `"Error {err} processing {method} {url}"` is logged.
pub fn wrap_route_with_error_handler<H, L>(logger: L, handler: H) -> ErrorContained<H, L> {
    ErrorContained { handler, logger }
}

impl<H, L> ErrorContained<H, L> {
    pub fn logger(&self) -> &L {
        &self.logger
    }
}

impl<C, H, L> RouteHandler<C> for ErrorContained<H, L>
where
    C: RequestContext,
    H: RouteHandler<C>,
    L: Logger,
{
    type Error = Infallible;

    fn call<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<(), Infallible>> {
        Box::pin(async move {
            match AssertUnwindSafe(self.handler.call(ctx)).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => contain_failure(&self.logger, ctx, &err),
                Err(payload) => {
                    contain_failure(&self.logger, ctx, &HandlerPanic::from_payload(payload))
                }
            }
            Ok(())
        })
    }
}

/// Record `err` on the response of `ctx` and log it.
pub fn contain_failure<C, L, E>(logger: &L, ctx: &mut C, err: &E)
where
    C: RequestContext + ?Sized,
    L: Logger + ?Sized,
    E: Display + Debug + ?Sized,
{
    let response = ctx.response_mut();
    response.status = 500;
    response.message = format!("Error: {}", err);
    response.body = None;

    let mut metadata = Map::new();
    metadata.insert("error".to_string(), Value::String(err.to_string()));
    metadata.insert("debug".to_string(), Value::String(format!("{:?}", err)));
    logger.log(&LogRecord::info(
        format!("Error {} processing {} {}", err, ctx.method(), ctx.url()),
        metadata,
    ));
}
