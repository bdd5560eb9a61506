//! Non-blocking delay.

use std::convert::Infallible;
use std::time::Duration;

use crate::runtime::callback::with_callback;

/// Suspend the current task for at least `ms` milliseconds.
///
/// The timer runs on a spawned tokio task that fires a bridged callback, so
/// other tasks keep running meanwhile. Not cancellable once started: dropping
/// the returned future stops waiting but the timer task still fires.
///
/// The lower bound holds while the runtime is alive. If the runtime shuts
/// down and drops the timer task first, this returns early.
///
/// # Panics
/// Panics when called outside a tokio runtime.
pub async fn sleep(ms: u64) {
    let deferred = with_callback::<(), Infallible, _>(|cb| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            cb.call(None, None);
        });
        Ok(())
    });

    if let Err(err) = deferred.await {
        // Only reachable when the runtime shuts down under the timer task.
        tracing::debug!(error = %err, ms, "Sleep timer abandoned");
    }
}
