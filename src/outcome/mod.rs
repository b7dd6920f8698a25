//! The binary outcome type and its operations.
//!
//! [`Outcome<T, E>`] is either a [`Success`](Outcome::Success) carrying a `T`
//! or a [`Failure`](Outcome::Failure) carrying an `E`. Every operation is
//! pure: it consumes the outcome and returns a new value, and a failure is
//! never silently dropped.
//!
//! Two error channels stay separate:
//!
//! 1. **Representable failure**: the `Failure` variant, threaded through the
//!    combinators.
//! 2. **Panics**: raised only by [`Outcome::unwrap`] as an assertion, and
//!    captured only at the [`perform`] / `perform_async` boundary, which turns
//!    them back into channel 1.
//!
//! # Examples
//!
//! ```rust
//! use tryflow::outcome::{Outcome, failure, success};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|value| value * 2);
//! assert_eq!(doubled, success(42));
//!
//! let chained = parse("x").flat_map(|value| success::<i32, String>(value + 1));
//! assert!(chained.is_failure());
//! assert_eq!(chained.unwrap_or(0), 0);
//!
//! let recovered: Outcome<i32, String> = failure("boom".to_string());
//! assert_eq!(recovered.unwrap_or_else(|error| error.len() as i32), 4);
//! ```
//!
//! # Laws
//!
//! - **Functor identity**: `m.map(|x| x) == m`
//! - **Functor composition**: `m.map(f).map(g) == m.map(|x| g(f(x)))`
//! - **Left identity**: `success(a).flat_map(f) == f(a)`
//! - **Right identity**: `m.flat_map(success) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`

mod base;
mod error;
mod nullable;
mod perform;
#[cfg(feature = "serde")]
mod serde_support;

pub use base::Outcome;
pub use error::{CaughtPanic, UnwrapFailure};
pub use nullable::into_result;
pub use perform::perform;
#[cfg(feature = "async")]
pub use perform::perform_async;

/// Creates a successful outcome.
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{Outcome, success};
///
/// let outcome: Outcome<i32, String> = success(1);
/// assert!(outcome.is_success());
/// ```
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Creates a failed outcome.
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{Outcome, failure};
///
/// let outcome: Outcome<i32, &str> = failure("bad");
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Returns `true` if `outcome` is a success.
#[inline]
pub const fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

/// Returns `true` if `outcome` is a failure.
#[inline]
pub const fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}

static_assertions::assert_impl_all!(Outcome<i32, u8>: Send, Sync, Clone, Copy);
static_assertions::assert_impl_all!(Outcome<String, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(CaughtPanic: Send, std::error::Error);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, String>: Send);
