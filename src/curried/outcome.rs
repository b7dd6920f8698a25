//! Data-last forms of the [`Outcome`] operations.

use crate::outcome::Outcome;

/// Data-last [`Outcome::map`].
///
/// # Examples
///
/// ```rust
/// use tryflow::curried::outcome::map;
/// use tryflow::outcome::success;
///
/// let increment = map(|value: i32| value + 1);
/// assert_eq!(increment(success::<i32, ()>(1)), success(2));
/// assert_eq!(increment(success::<i32, ()>(2)), success(3));
/// ```
#[inline]
pub fn map<T, U, E, F>(function: F) -> impl Fn(Outcome<T, E>) -> Outcome<U, E>
where
    F: Fn(T) -> U,
{
    move |outcome| outcome.map(&function)
}

/// Data-last [`Outcome::map_err`].
#[inline]
pub fn map_err<T, E, F, G>(function: G) -> impl Fn(Outcome<T, E>) -> Outcome<T, F>
where
    G: Fn(E) -> F,
{
    move |outcome| outcome.map_err(&function)
}

/// Data-last [`Outcome::flat_map`].
///
/// # Examples
///
/// ```rust
/// use tryflow::curried::outcome::flat_map;
/// use tryflow::outcome::{Outcome, failure, success};
///
/// let non_negative = flat_map(|value: i32| -> Outcome<i32, String> {
///     if value >= 0 { success(value) } else { failure(format!("{value} < 0")) }
/// });
/// assert_eq!(non_negative(success(3)), success(3));
/// assert_eq!(non_negative(success(-1)), failure("-1 < 0".to_string()));
/// ```
#[inline]
pub fn flat_map<T, U, E, F>(function: F) -> impl Fn(Outcome<T, E>) -> Outcome<U, E>
where
    F: Fn(T) -> Outcome<U, E>,
{
    move |outcome| outcome.flat_map(&function)
}

/// Data-last [`Outcome::map_or`].
#[inline]
pub fn map_or<T, U, E, F>(function: F, default: U) -> impl Fn(Outcome<T, E>) -> U
where
    F: Fn(T) -> U,
    U: Clone,
{
    move |outcome| outcome.map_or(&function, default.clone())
}

/// Data-last [`Outcome::map_or_else`].
#[inline]
pub fn map_or_else<T, U, E, F, D>(function: F, fallback: D) -> impl Fn(Outcome<T, E>) -> U
where
    F: Fn(T) -> U,
    D: Fn(E) -> U,
{
    move |outcome| outcome.map_or_else(&function, &fallback)
}

/// Data-last [`Outcome::unwrap_or`].
///
/// # Examples
///
/// ```rust
/// use tryflow::curried::outcome::unwrap_or;
/// use tryflow::outcome::{failure, success};
///
/// let or_zero = unwrap_or(0);
/// assert_eq!(or_zero(success::<i32, &str>(7)), 7);
/// assert_eq!(or_zero(failure::<i32, &str>("bad")), 0);
/// ```
#[inline]
pub fn unwrap_or<T, E>(default: T) -> impl Fn(Outcome<T, E>) -> T
where
    T: Clone,
{
    move |outcome| outcome.unwrap_or(default.clone())
}

/// Data-last [`Outcome::unwrap_or_else`].
#[inline]
pub fn unwrap_or_else<T, E, F>(fallback: F) -> impl Fn(Outcome<T, E>) -> T
where
    F: Fn(E) -> T,
{
    move |outcome| outcome.unwrap_or_else(&fallback)
}
