//! Callback-to-future bridge.
//!
//! Adapts APIs that report completion through a single `(error, result)`
//! callback into a future. Intended only for wrapping callback-based
//! external APIs; native code should use futures or channels directly.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::oneshot;

type Outcome<T, E> = Result<Option<T>, E>;

/// Failure of a bridged operation.
#[derive(Debug, Error)]
pub enum BridgeError<E> {
    /// The operation reported an error, or registration failed.
    #[error("{0}")]
    Failed(E),

    /// Every callback handle was dropped without being called.
    #[error("callback dropped without being called")]
    Abandoned,
}

/// Completion handle passed to the registering function.
///
/// Only the first call settles the [`Deferred`]; later calls are ignored.
pub struct Callback<T, E> {
    slot: Arc<Mutex<Option<oneshot::Sender<Outcome<T, E>>>>>,
}

impl<T, E> Clone for Callback<T, E> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, E> Callback<T, E> {
    /// Report completion: `Some(err)` fails, otherwise resolves with `result`.
    pub fn call(&self, err: Option<E>, result: Option<T>) {
        match err {
            Some(err) => self.settle(Err(err)),
            None => self.settle(Ok(result)),
        }
    }

    /// Whether the deferred value has already been settled.
    pub fn is_settled(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn settle(&self, outcome: Outcome<T, E>) {
        let sender = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(tx) = sender {
            // Receiver gone means nobody awaits the result anymore.
            let _ = tx.send(outcome);
        }
    }
}

/// A single-resolution value produced by [`with_callback`].
#[must_use = "futures do nothing unless awaited"]
pub struct Deferred<T, E> {
    rx: oneshot::Receiver<Outcome<T, E>>,
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<Option<T>, BridgeError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(BridgeError::Failed(err)),
            Err(_) => Err(BridgeError::Abandoned),
        })
    }
}

/// Invoke `register` immediately with a fresh [`Callback`] and return the
/// value it will settle.
///
/// An `Err` returned by `register` fails the deferred value the same way a
/// callback-reported error does, unless the callback already fired.
pub fn with_callback<T, E, F>(register: F) -> Deferred<T, E>
where
    F: FnOnce(Callback<T, E>) -> Result<(), E>,
{
    let (tx, rx) = oneshot::channel();
    let callback = Callback {
        slot: Arc::new(Mutex::new(Some(tx))),
    };

    if let Err(err) = register(callback.clone()) {
        callback.settle(Err(err));
    }

    Deferred { rx }
}
