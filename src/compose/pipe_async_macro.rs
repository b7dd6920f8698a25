//! Asynchronous pipelines.
//!
//! These macros mirror [`pipe!`](crate::pipe), [`try_pipe!`](crate::try_pipe),
//! [`flow!`](crate::flow) and [`try_flow!`](crate::try_flow) for steps that
//! return futures. Each step's result is awaited before the next step is
//! called, so steps run strictly one at a time and never concurrently.
//!
//! A step may return anything implementing [`IntoFuture`]. Plain functions
//! can be adapted with [`lift_sync`](crate::compose::lift_sync).
//!
//! Panics are not caught here. A panic inside a step propagates to whoever
//! polls the pipeline; wrap the step with
//! [`perform_async`](crate::outcome::perform_async) to turn it into a
//! `Failure` instead.
//!
//! There is no timeout and no cancellation beyond dropping the future.
//!
//! # Examples
//!
//! ```rust
//! use tryflow::outcome::{Outcome, failure, success};
//! use tryflow::{pipe_async, try_pipe_async};
//!
//! async fn fetch_user(id: u32) -> Outcome<String, String> {
//!     if id == 1 { success("ada".to_string()) } else { failure(format!("no user {id}")) }
//! }
//!
//! async fn greet(name: String) -> Outcome<String, String> {
//!     success(format!("hello, {name}"))
//! }
//!
//! futures::executor::block_on(async {
//!     let length = pipe_async!(
//!         "tryflow",
//!         |text: &'static str| async move { text.len() },
//!         |length: usize| async move { length * 2 },
//!     )
//!     .await;
//!     assert_eq!(length, 14);
//!
//!     assert_eq!(try_pipe_async!(success(1), fetch_user, greet).await, success("hello, ada".to_string()));
//!     assert_eq!(try_pipe_async!(success(2), fetch_user, greet).await, failure("no user 2".to_string()));
//! });
//! ```

/// Pipes a value through asynchronous steps from left to right.
///
/// Produces a future. When awaited, it feeds the value to the first step,
/// awaits the returned future, feeds that output to the next step, and so on.
/// Every step runs.
///
/// # Syntax
///
/// - `pipe_async!(x)` - A future resolving to `x`
/// - `pipe_async!(x, f, g, ...)` - A future resolving to `g(f(x).await).await...`
///
/// # Examples
///
/// ```rust
/// use tryflow::compose::lift_sync;
/// use tryflow::pipe_async;
///
/// # futures::executor::block_on(async {
/// let result = pipe_async!(
///     5,
///     |value: i32| async move { value + 1 },
///     lift_sync(|value: i32| value * 2),
/// )
/// .await;
/// assert_eq!(result, 12);
/// # });
/// ```
#[macro_export]
macro_rules! pipe_async {
    ($value:expr $(,)?) => {
        async move { $value }
    };

    ($value:expr, $($step:expr),+ $(,)?) => {
        async move {
            let threaded = $value;
            $(
                let threaded = ($step)(threaded).await;
            )+
            threaded
        }
    };
}

/// Threads an [`Outcome`](crate::outcome::Outcome) through asynchronous,
/// outcome-producing steps.
///
/// Each step takes the success payload and returns a future of an `Outcome`
/// with the same error type. The first `Failure` ends the pipeline: later
/// steps are never called and their futures never created.
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{Outcome, failure, success};
/// use tryflow::try_pipe_async;
///
/// # futures::executor::block_on(async {
/// let result: Outcome<i32, &str> = try_pipe_async!(
///     success(10),
///     |value: i32| async move { success(value + 5) },
///     |value: i32| async move { if value > 10 { success(value * 2) } else { failure("too small") } },
/// )
/// .await;
/// assert_eq!(result, success(30));
/// # });
/// ```
#[macro_export]
macro_rules! try_pipe_async {
    ($outcome:expr $(,)?) => {
        async move { $outcome }
    };

    ($outcome:expr, $($step:expr),+ $(,)?) => {
        async move {
            let threaded = $outcome;
            $(
                let threaded = match threaded {
                    $crate::outcome::Outcome::Success(value) => ($step)(value).await,
                    $crate::outcome::Outcome::Failure(error) => {
                        return $crate::outcome::Outcome::Failure(error);
                    }
                };
            )+
            threaded
        }
    };
}

/// Composes asynchronous steps into a reusable function returning a future.
///
/// `flow_async!(f, g)(x)` is equivalent to `pipe_async!(x, f, g)`. The
/// first step is called as soon as the function is; later steps are called
/// while the returned future is polled. Steps after the first must be
/// [`Clone`], since each call needs its own copy.
///
/// # Examples
///
/// ```rust
/// use tryflow::flow_async;
///
/// let describe = flow_async!(
///     |value: i32| async move { value * value },
///     |square: i32| async move { format!("<{square}>") },
/// );
///
/// # futures::executor::block_on(async {
/// assert_eq!(describe(3).await, "<9>");
/// assert_eq!(describe(4).await, "<16>");
/// # });
/// ```
#[macro_export]
macro_rules! flow_async {
    ($step:expr $(,)?) => {{
        let step = $step;
        move |input| ::core::future::IntoFuture::into_future(step(input))
    }};

    ($step:expr, $($remaining_steps:expr),+ $(,)?) => {{
        let first = $crate::flow_async!($step);
        let rest = $crate::flow_async!($($remaining_steps),+);
        move |input| {
            let pending = first(input);
            let rest = ::core::clone::Clone::clone(&rest);
            async move { rest(pending.await).await }
        }
    }};
}

/// Composes asynchronous outcome-producing steps into a reusable function.
///
/// `try_flow_async!(f, g)(m)` is equivalent to `try_pipe_async!(m, f, g)`.
/// Every step must be [`Clone`].
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{Outcome, failure, success};
/// use tryflow::try_flow_async;
///
/// let checked = try_flow_async!(
///     |value: i32| async move {
///         if value >= 0 { success(value) } else { failure("negative".to_string()) }
///     },
///     |value: i32| async move { success::<i32, String>(value + 1) },
/// );
///
/// # futures::executor::block_on(async {
/// assert_eq!(checked(success(1)).await, success(2));
/// assert_eq!(checked(success(-1)).await, failure("negative".to_string()));
/// # });
/// ```
#[macro_export]
macro_rules! try_flow_async {
    ($step:expr $(,)?) => {{
        let step = $step;
        move |outcome| {
            let step = ::core::clone::Clone::clone(&step);
            async move {
                match outcome {
                    $crate::outcome::Outcome::Success(value) => step(value).await,
                    $crate::outcome::Outcome::Failure(error) => {
                        $crate::outcome::Outcome::Failure(error)
                    }
                }
            }
        }
    }};

    ($step:expr, $($remaining_steps:expr),+ $(,)?) => {{
        let first = $crate::try_flow_async!($step);
        let rest = $crate::try_flow_async!($($remaining_steps),+);
        move |outcome| {
            let pending = first(outcome);
            let rest = ::core::clone::Clone::clone(&rest);
            async move { rest(pending.await).await }
        }
    }};
}
