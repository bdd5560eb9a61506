//! Route handler abstraction.

use futures_util::future::BoxFuture;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

/// An asynchronous request handler operating on a mutable context.
///
/// Errors must be displayable and debuggable so middleware can report them.
pub trait RouteHandler<C>: Send + Sync {
    type Error: Display + Debug + Send;

    fn call<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<(), Self::Error>>;
}

/// A [`RouteHandler`] backed by a closure. See [`handler_fn`].
pub struct HandlerFn<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

/// Turn a closure returning a boxed future into a [`RouteHandler`].
///
/// ```ignore
/// let handler = handler_fn(|ctx: &mut Context| Box::pin(async move {
///     ctx.response.message = "ok".into();
///     Ok::<_, MyError>(())
/// }));
/// ```
pub fn handler_fn<C, E, F>(f: F) -> HandlerFn<F, E>
where
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, Result<(), E>> + Send + Sync,
{
    HandlerFn {
        f,
        _error: PhantomData,
    }
}

impl<C, E, F> RouteHandler<C> for HandlerFn<F, E>
where
    F: for<'a> Fn(&'a mut C) -> BoxFuture<'a, Result<(), E>> + Send + Sync,
    E: Display + Debug + Send,
{
    type Error = E;

    fn call<'a>(&'a self, ctx: &'a mut C) -> BoxFuture<'a, Result<(), E>> {
        (self.f)(ctx)
    }
}
