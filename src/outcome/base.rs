//! The [`Outcome`] enum and its data-first operations.

use super::UnwrapFailure;
use crate::optional::Optional;

/// A success carrying a `T` or a failure carrying an `E`.
///
/// Exactly one payload is present, selected by the variant. An outcome is
/// immutable: operations consume it and build a new one.
///
/// # Type Parameters
///
/// * `T` - The success payload
/// * `E` - The failure payload
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::Outcome;
///
/// let outcome: Outcome<i32, String> = Outcome::Success(2);
///
/// match outcome {
///     Outcome::Success(value) => assert_eq!(value, 2),
///     Outcome::Failure(error) => panic!("unexpected failure: {error}"),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The success variant.
    Success(T),
    /// The failure variant.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{Outcome, failure, success};
    ///
    /// assert!(success::<i32, ()>(1).is_success());
    /// assert!(!failure::<i32, ()>(()).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the success payload, asserting that failure is impossible here.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapFailure<E>`] payload whose
    /// [`cause`](UnwrapFailure::cause) is the failure payload. The payload can
    /// be recovered with [`std::panic::catch_unwind`] and `downcast`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{Outcome, UnwrapFailure, failure, success};
    ///
    /// assert_eq!(success::<i32, String>(3).unwrap(), 3);
    ///
    /// let payload = std::panic::catch_unwind(|| {
    ///     failure::<i32, String>("boom".to_string()).unwrap()
    /// })
    /// .unwrap_err();
    /// let error = payload.downcast::<UnwrapFailure<String>>().unwrap();
    /// assert_eq!(error.cause(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => std::panic::panic_any(UnwrapFailure::new(error)),
        }
    }

    /// Returns the success payload, or the failure wrapped in [`UnwrapFailure`].
    ///
    /// The non-panicking form of [`unwrap`](Self::unwrap), for callers that
    /// want to forward the assertion error through `?`.
    ///
    /// # Errors
    ///
    /// Returns `Err(UnwrapFailure)` when this is a `Failure`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapFailure<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrapFailure::new(error)),
        }
    }

    /// Returns the success payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the error.
    ///
    /// `fallback` runs only on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{Outcome, failure};
    ///
    /// let outcome: Outcome<usize, String> = failure("four".to_string());
    /// assert_eq!(outcome.unwrap_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => fallback(error),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success payload.
    ///
    /// A failure is returned with the same error and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{failure, success};
    ///
    /// assert_eq!(success::<i32, String>(2).map(|value| value * 3), success(6));
    /// assert_eq!(
    ///     failure::<i32, &str>("bad").map(|value| value * 3),
    ///     failure("bad")
    /// );
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the success payload, or returns `default` on failure.
    ///
    /// The transform comes first and the default last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{failure, success};
    ///
    /// assert_eq!(success::<i32, ()>(2).map_or(|value| value * 3, 0), 6);
    /// assert_eq!(failure::<i32, ()>(()).map_or(|value| value * 3, 0), 0);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, function: F, default: U) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies `function` on success or `fallback` on failure, collapsing to a `U`.
    #[inline]
    pub fn map_or_else<U, F, D>(self, function: F, fallback: D) -> U
    where
        F: FnOnce(T) -> U,
        D: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => fallback(error),
        }
    }

    /// Chains an outcome-producing `function` onto the success payload.
    ///
    /// On failure the original failure is returned and `function` is not
    /// called. The error type is unchanged; use [`map_err`](Self::map_err)
    /// first to adapt it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{Outcome, failure, success};
    ///
    /// fn halve(value: i32) -> Outcome<i32, String> {
    ///     if value % 2 == 0 {
    ///         success(value / 2)
    ///     } else {
    ///         failure(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(success(8).flat_map(halve).flat_map(halve), success(2));
    /// assert_eq!(success(6).flat_map(halve).flat_map(halve), failure("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `function` to the failure payload; a success passes through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{failure, success};
    ///
    /// assert_eq!(failure::<(), i32>(404).map_err(|code| format!("HTTP {code}")), failure("HTTP 404".to_string()));
    /// assert_eq!(success::<i32, i32>(1).map_err(|code| code + 1), success(1));
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Projects onto [`Optional`], discarding the error payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{failure, success};
    ///
    /// assert_eq!(success::<i32, &str>(5).to_option(), Some(5));
    /// assert_eq!(failure::<i32, &str>("bad").to_option(), None);
    /// ```
    #[inline]
    #[allow(clippy::wrong_self_convention)]
    pub fn to_option(self) -> Optional<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, discarding a success.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(t)` becomes `Success(t)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// `Success(t)` becomes `Ok(t)` and `Failure(e)` becomes `Err(e)`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Collecting
// =============================================================================

impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    /// Collects every success payload, stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tryflow::outcome::{Outcome, failure, success};
    ///
    /// let all: Outcome<Vec<i32>, &str> = vec![success(1), success(2)].into_iter().collect();
    /// assert_eq!(all, success(vec![1, 2]));
    ///
    /// let stopped: Outcome<Vec<i32>, &str> =
    ///     vec![success(1), failure("bad"), failure("worse")].into_iter().collect();
    /// assert_eq!(stopped, failure("bad"));
    /// ```
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        iterator
            .into_iter()
            .map(Result::<T, E>::from)
            .collect::<Result<V, E>>()
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_does_not_call_function_on_failure() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, &str> = Outcome::Failure("bad");
        let mapped = outcome.map(|value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(mapped, Outcome::Failure("bad"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_flat_map_does_not_call_function_on_failure() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, &str> = Outcome::Failure("bad");
        let chained = outcome.flat_map(|value| {
            calls.set(calls.get() + 1);
            Outcome::Success(value + 1)
        });
        assert_eq!(chained, Outcome::Failure("bad"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_err_leaves_success_untouched() {
        let outcome: Outcome<i32, i32> = Outcome::Success(1);
        assert_eq!(outcome.map_err(|code| code.to_string()), Outcome::Success(1));
    }

    #[rstest]
    fn test_as_ref_borrows_payload() {
        let outcome: Outcome<String, String> = Outcome::Success("hello".to_string());
        assert_eq!(outcome.as_ref().map(String::len), Outcome::Success(5));
        assert!(outcome.is_success());
    }

    #[rstest]
    fn test_try_unwrap_returns_cause() {
        let outcome: Outcome<i32, &str> = Outcome::Failure("bad");
        let error = outcome.try_unwrap().unwrap_err();
        assert_eq!(*error.cause(), "bad");
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        assert_eq!(outcome, Outcome::Success(42));
        let back: Result<i32, String> = outcome.into();
        assert_eq!(back, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<i32, String> = err.into();
        assert_eq!(outcome, Outcome::Failure("error".to_string()));
    }

    #[rstest]
    fn test_into_error() {
        assert_eq!(Outcome::<i32, &str>::Failure("bad").into_error(), Some("bad"));
        assert_eq!(Outcome::<i32, &str>::Success(1).into_error(), None);
    }
}
