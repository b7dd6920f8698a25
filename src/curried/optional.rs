//! Data-last forms of the [`optional`](crate::optional) operations.

use crate::optional::{self, Optional};

/// Data-last [`optional::map`].
///
/// # Examples
///
/// ```rust
/// use tryflow::curried::optional::map;
///
/// let names: Vec<Option<usize>> = vec![Some("ada"), None, Some("grace")]
///     .into_iter()
///     .map(map(|name: &str| name.len()))
///     .collect();
/// assert_eq!(names, vec![Some(3), None, Some(5)]);
/// ```
#[inline]
pub fn map<T, U, F>(function: F) -> impl Fn(Optional<T>) -> Optional<U>
where
    F: Fn(T) -> U,
{
    move |value| optional::map(value, &function)
}

/// Data-last [`optional::map_or`]; the default still comes first.
#[inline]
pub fn map_or<T, U, F>(default: U, function: F) -> impl Fn(Optional<T>) -> U
where
    F: Fn(T) -> U,
    U: Clone,
{
    move |value| optional::map_or(value, default.clone(), &function)
}

/// Data-last [`optional::map_or_else`]; the transform still comes first.
#[inline]
pub fn map_or_else<T, U, F, D>(function: F, fallback: D) -> impl Fn(Optional<T>) -> U
where
    F: Fn(T) -> U,
    D: Fn() -> U,
{
    move |value| optional::map_or_else(value, &function, &fallback)
}

/// Data-last [`optional::unwrap_or`].
#[inline]
pub fn unwrap_or<T>(default: T) -> impl Fn(Optional<T>) -> T
where
    T: Clone,
{
    move |value| optional::unwrap_or(value, default.clone())
}

/// Data-last [`optional::unwrap_or_else`].
#[inline]
pub fn unwrap_or_else<T, F>(fallback: F) -> impl Fn(Optional<T>) -> T
where
    F: Fn() -> T,
{
    move |value| optional::unwrap_or_else(value, &fallback)
}
