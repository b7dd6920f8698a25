//! The panic capture boundary.
//!
//! [`perform`] and [`perform_async`] are the only places where a panic is
//! deliberately caught and turned into a `Failure`. The caught payload is
//! classified without assuming its shape (see [`CaughtPanic`]).
//!
//! Capturing relies on unwinding. A binary built with `panic = "abort"`
//! aborts before the boundary is reached.

use std::panic::{AssertUnwindSafe, catch_unwind};

use super::{CaughtPanic, Outcome};

/// Runs `function`, capturing a panic as a `Failure`.
///
/// Returns `Success(function())` when it returns normally. The panic never
/// escapes this call.
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{perform, success};
///
/// let parsed = perform(|| "42".parse::<i32>().unwrap());
/// assert_eq!(parsed.map_err(|caught| caught.to_string()), success(42));
///
/// let exploded = perform(|| -> i32 { panic!("no value") });
/// assert_eq!(exploded.into_error().unwrap().message(), Some("no value"));
/// ```
pub fn perform<T, F>(function: F) -> Outcome<T, CaughtPanic>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(function)) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured("perform", payload),
    }
}

/// Runs the future produced by `function`, capturing a panic as a `Failure`.
///
/// A panic while building the future or while polling it becomes a
/// `Failure`; the future's output becomes a `Success`. The future is awaited
/// on the caller's task, with no timeout and no cancellation.
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{perform_async, success};
///
/// async fn fetch_reading() -> i32 {
///     panic!("lost connection")
/// }
///
/// futures::executor::block_on(async {
///     let value = perform_async(|| async { 40 + 2 }).await;
///     assert_eq!(value.map_err(|caught| caught.to_string()), success(42));
///
///     let exploded = perform_async(fetch_reading).await;
///     assert_eq!(exploded.into_error().unwrap().message(), Some("lost connection"));
/// });
/// ```
#[cfg(feature = "async")]
pub async fn perform_async<T, F, Fut>(function: F) -> Outcome<T, CaughtPanic>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    use futures::FutureExt;

    let future = match catch_unwind(AssertUnwindSafe(function)) {
        Ok(future) => future,
        Err(payload) => return captured("perform_async", payload),
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Success(value),
        Err(payload) => captured("perform_async", payload),
    }
}

fn captured<T>(
    boundary: &'static str,
    payload: Box<dyn std::any::Any + Send>,
) -> Outcome<T, CaughtPanic> {
    let caught = CaughtPanic::new(payload);
    record_capture(boundary, &caught);
    Outcome::Failure(caught)
}

#[cfg(feature = "tracing")]
fn record_capture(boundary: &'static str, caught: &CaughtPanic) {
    tracing::debug!(
        boundary,
        message = caught.message().unwrap_or("<non-string payload>"),
        "captured panic as failure"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
const fn record_capture(_boundary: &'static str, _caught: &CaughtPanic) {}
