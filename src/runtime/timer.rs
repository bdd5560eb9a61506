//! Wall-clock timing of asynchronous operations.

use std::future::Future;
use std::time::Instant;

/// Run `op` and return its result together with the elapsed time in
/// milliseconds (fractional, monotonic clock).
///
/// Errors from `op` are returned unchanged and no timing is reported.
pub async fn time<F, Fut, T, E>(op: F) -> Result<(T, f64), E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let result = op().await?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::trace!(elapsed_ms, "Timed operation completed");
    Ok((result, elapsed_ms))
}
