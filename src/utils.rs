use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::warn;

/// Runs `operation` until it succeeds or `max_retries` retries have failed.
///
/// Delays between attempts follow a Fibonacci sequence starting at `initial_delay`.
/// With `max_retries == 0` the operation runs exactly once.
pub async fn retry_with_backoff<T, E, Fut, F>(
    mut operation: F,
    initial_delay: Duration,
    max_retries: usize,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut retries = 0;
    let mut fib = (initial_delay, initial_delay);

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if retries < max_retries => {
                warn!(
                    "Operation failed: {:#}. Retrying in {:?} (attempt {}/{})",
                    e,
                    fib.0,
                    retries + 1,
                    max_retries
                );
                sleep(fib.0).await;
                retries += 1;
                fib = (fib.1, fib.0 + fib.1);
            }
            Err(e) => return Err(e),
        }
    }
}
