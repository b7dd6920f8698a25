//! Small step helpers for pipelines.
//!
//! - [`identity`]: passes its argument through
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`lift_sync`]: turns a plain function into an asynchronous step

/// Returns the value unchanged.
///
/// `pipe!(x, identity)` is `x`, and inserting `identity` anywhere in a
/// pipeline does not change its result.
///
/// # Examples
///
/// ```
/// use tryflow::compose::identity;
/// use tryflow::pipe;
///
/// fn double(value: i32) -> i32 { value * 2 }
///
/// assert_eq!(pipe!(5, identity, double, identity), double(5));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a step that discards its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use tryflow::compose::constant;
/// use tryflow::outcome::{Outcome, success};
/// use tryflow::try_pipe;
///
/// let fallback = constant::<Outcome<&str, ()>, i32>(success("ready"));
/// assert_eq!(try_pipe!(success(1), fallback), success("ready"));
/// ```
#[inline]
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T + Clone
where
    T: Clone,
{
    move |_| value.clone()
}

/// Adapts a synchronous function into an asynchronous pipeline step.
///
/// The returned step computes its result eagerly and wraps it in a future
/// that is immediately ready.
///
/// # Examples
///
/// ```
/// use tryflow::compose::lift_sync;
/// use tryflow::flow_async;
///
/// let parse = flow_async!(
///     lift_sync(|text: &'static str| text.len()),
///     |length: usize| async move { length + 1 },
/// );
///
/// # futures::executor::block_on(async {
/// assert_eq!(parse("four").await, 5);
/// # });
/// ```
#[inline]
pub fn lift_sync<A, B, F>(function: F) -> impl Fn(A) -> std::future::Ready<B> + Clone
where
    F: Fn(A) -> B + Clone,
{
    move |input| std::future::ready(function(input))
}
