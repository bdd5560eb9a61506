//! Request context shared between the router and handlers.
//!
//! # Responsibilities
//! - Expose the request line (method, url) to middleware
//! - Hold the mutable response state handlers and middleware write to
//! - Convert the finished context into an axum response
//!
//! # Design Decisions
//! - Middleware only depends on the `RequestContext` trait, never on axum
//! - Response body defaults to the status message when no body was set

use axum::{
    body::{Body, Bytes},
    http::{request::Parts, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

/// What middleware needs to know about a request.
pub trait RequestContext: Send {
    fn method(&self) -> &str;
    fn url(&self) -> &str;
    fn response_mut(&mut self) -> &mut ResponseState;
}

/// Response fields handlers and middleware may set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseState {
    /// HTTP status code.
    pub status: u16,
    /// Status message; sent as the body when `body` is unset.
    pub message: String,
    pub body: Option<Bytes>,
}

impl Default for ResponseState {
    fn default() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            message: String::new(),
            body: None,
        }
    }
}

/// Concrete request context built from an axum request.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub method: String,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
    pub response: ResponseState,
}

impl Context {
    /// Create a context for a request line with no headers or body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Build a context from request head parts and an already buffered body.
    pub fn from_parts(parts: &Parts, body: Bytes) -> Self {
        let url = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.to_string());

        Self {
            method: parts.method.to_string(),
            url,
            headers: parts.headers.clone(),
            body,
            response: ResponseState::default(),
        }
    }
}

impl RequestContext for Context {
    fn method(&self) -> &str {
        &self.method
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn response_mut(&mut self) -> &mut ResponseState {
        &mut self.response
    }
}

impl IntoResponse for Context {
    fn into_response(self) -> Response {
        self.response.into_response()
    }
}

impl IntoResponse for ResponseState {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = match self.body {
            Some(bytes) => Body::from(bytes),
            None => Body::from(self.message),
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;
        response
    }
}
