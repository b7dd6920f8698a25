//! Bridging the "value or error, each possibly missing" pair convention.

use super::Outcome;
use crate::optional::{self, Nullish, Optional};

/// Folds a nullable `(value, error)` pair into a single outcome.
///
/// Callback-style and some foreign APIs hand back two slots of which at most
/// one is meant to carry meaning. If `error` holds a value, the result is a
/// failure regardless of `value`. Otherwise the result is a success carrying
/// [`optional::from(value)`](optional::from), so a pair with both slots empty
/// is a success with an absent value.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional::Nullish;
/// use tryflow::outcome::{failure, into_result, success};
///
/// assert_eq!(
///     into_result(Nullish::Value(3), Nullish::<&str>::Null),
///     success(Some(3))
/// );
/// assert_eq!(
///     into_result(Nullish::Value(3), Nullish::Value("bad")),
///     failure("bad")
/// );
/// assert_eq!(
///     into_result(Nullish::<i32>::Absent, Nullish::<&str>::Absent),
///     success(None)
/// );
/// ```
pub fn into_result<T, E>(value: Nullish<T>, error: Nullish<E>) -> Outcome<Optional<T>, E> {
    match error {
        Nullish::Value(error) => Outcome::Failure(error),
        Nullish::Null | Nullish::Absent => Outcome::Success(optional::from(value)),
    }
}
