//! Data-first operations over [`Optional`].
//!
//! These mirror the [`Outcome`](crate::outcome::Outcome) methods for the
//! presence/absence case. Each consumes its subject and never panics, with
//! the exception of [`unwrap`].

use super::{Nullish, Optional, UnwrapAbsent};

// =============================================================================
// Construction
// =============================================================================

/// Normalizes both empty representations of a [`Nullish`] into `None`.
///
/// Present values pass through untouched, including falsy ones such as `0`,
/// `false` and `""`.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional::{self, Nullish};
///
/// assert_eq!(optional::from(Nullish::Value(false)), Some(false));
/// assert_eq!(optional::from(Nullish::Value("")), Some(""));
/// assert_eq!(optional::from(Nullish::<&str>::Null), None);
/// assert_eq!(optional::from(Nullish::<&str>::Absent), None);
/// ```
#[inline]
pub fn from<T>(value: Nullish<T>) -> Optional<T> {
    match value {
        Nullish::Value(value) => Some(value),
        Nullish::Null | Nullish::Absent => None,
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns `true` if the value is present.
#[inline]
pub const fn is_some<T>(value: &Optional<T>) -> bool {
    value.is_some()
}

/// Returns `true` if the value is the normalized absent sentinel.
#[inline]
pub const fn is_none<T>(value: &Optional<T>) -> bool {
    value.is_none()
}

/// Returns `true` for either empty representation of a [`Nullish`].
///
/// This is the superset check: [`is_none`] only recognizes the normalized
/// sentinel, while `is_nullish` also matches [`Nullish::Null`].
///
/// # Examples
///
/// ```rust
/// use tryflow::optional::{self, Nullish};
///
/// assert!(optional::is_nullish(&Nullish::<i32>::Null));
/// assert!(optional::is_nullish(&Nullish::<i32>::Absent));
/// assert!(!optional::is_nullish(&Nullish::Value(0)));
/// ```
#[inline]
pub const fn is_nullish<T>(value: &Nullish<T>) -> bool {
    value.is_nullish()
}

// =============================================================================
// Extraction
// =============================================================================

/// Returns the present value.
///
/// # Panics
///
/// Panics with an [`UnwrapAbsent`] payload when the value is absent.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional;
///
/// assert_eq!(optional::unwrap(Some(5)), 5);
/// ```
#[inline]
#[track_caller]
pub fn unwrap<T>(value: Optional<T>) -> T {
    match value {
        Some(value) => value,
        None => std::panic::panic_any(UnwrapAbsent::new()),
    }
}

/// Returns the present value or `default`.
#[inline]
pub fn unwrap_or<T>(value: Optional<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Returns the present value or computes one from `fallback`.
///
/// `fallback` runs only when the value is absent.
#[inline]
pub fn unwrap_or_else<T, F>(value: Optional<T>, fallback: F) -> T
where
    F: FnOnce() -> T,
{
    value.unwrap_or_else(fallback)
}

// =============================================================================
// Transformation
// =============================================================================

/// Applies `function` to a present value; absence stays absent.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional;
///
/// assert_eq!(optional::map(Some(2), |value| value + 1), Some(3));
/// assert_eq!(optional::map(None::<i32>, |value| value + 1), None);
/// ```
#[inline]
pub fn map<T, U, F>(value: Optional<T>, function: F) -> Optional<U>
where
    F: FnOnce(T) -> U,
{
    value.map(function)
}

/// Applies `function` to a present value, or returns `default`.
///
/// The default comes right after the subject.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional;
///
/// assert_eq!(optional::map_or(Some(2), 0, |value| value * 10), 20);
/// assert_eq!(optional::map_or(None::<i32>, 0, |value| value * 10), 0);
/// ```
#[inline]
pub fn map_or<T, U, F>(value: Optional<T>, default: U, function: F) -> U
where
    F: FnOnce(T) -> U,
{
    value.map_or(default, function)
}

/// Applies `function` to a present value, or computes the result from `fallback`.
///
/// Unlike [`map_or`], the transform comes first and the fallback last.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional;
///
/// assert_eq!(optional::map_or_else(Some(2), |value| value * 10, || -1), 20);
/// assert_eq!(optional::map_or_else(None::<i32>, |value| value * 10, || -1), -1);
/// ```
#[inline]
pub fn map_or_else<T, U, F, D>(value: Optional<T>, function: F, fallback: D) -> U
where
    F: FnOnce(T) -> U,
    D: FnOnce() -> U,
{
    value.map_or_else(fallback, function)
}
