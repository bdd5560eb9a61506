//! Tower service adapter for contained handlers.
//!
//! # Responsibilities
//! - Buffer the request body and build a `Context`
//! - Run the error-contained handler
//! - Convert the finished context into the HTTP response
//!
//! # Design Decisions
//! - `Error = Infallible`, so the service mounts with `Router::route_service`
//! - Body read failures are reported through the same containment path

use axum::{
    body::{Body, Bytes},
    http::Request,
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context as TaskContext, Poll};
use tower::Service;

use crate::http::context::Context;
use crate::http::handler::RouteHandler;
use crate::http::middleware::error_containment::{
    contain_failure, wrap_route_with_error_handler, ErrorContained,
};
use crate::observability::logging::Logger;

/// Largest request body buffered into a [`Context`].
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// A cloneable service running an error-contained handler per request.
pub struct ContainedService<H, L> {
    route: Arc<ErrorContained<H, L>>,
    body_limit: usize,
}

impl<H, L> ContainedService<H, L> {
    /// Wrap `handler` with error containment and expose it as a service.
    pub fn new(logger: L, handler: H) -> Self {
        Self {
            route: Arc::new(wrap_route_with_error_handler(logger, handler)),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Override the request body limit in bytes.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }
}

impl<H, L> Clone for ContainedService<H, L> {
    fn clone(&self) -> Self {
        Self {
            route: self.route.clone(),
            body_limit: self.body_limit,
        }
    }
}

impl<H, L> Service<Request<Body>> for ContainedService<H, L>
where
    H: RouteHandler<Context> + 'static,
    L: Logger + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let route = self.route.clone();
        let body_limit = self.body_limit;

        Box::pin(async move {
            let (parts, body) = request.into_parts();
            let mut ctx = match axum::body::to_bytes(body, body_limit).await {
                Ok(bytes) => Context::from_parts(&parts, bytes),
                Err(err) => {
                    let mut ctx = Context::from_parts(&parts, Bytes::new());
                    contain_failure(route.logger(), &mut ctx, &err);
                    return Ok(ctx.into_response());
                }
            };

            tracing::debug!(method = %ctx.method, url = %ctx.url, "Dispatching request");

            match route.call(&mut ctx).await {
                Ok(()) => {}
                Err(never) => match never {},
            }
            Ok(ctx.into_response())
        })
    }
}
