//! The `pipe!` and `try_pipe!` macros for left-to-right threading.
//!
//! - [`pipe!`](crate::pipe) runs every step unconditionally.
//! - [`try_pipe!`](crate::try_pipe) threads an [`Outcome`](crate::outcome::Outcome)
//!   and stops at the first failure.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`. Every step runs, in
/// order, whatever the value looks like: an absent
/// [`Optional`](crate::optional::Optional) does not stop the pipeline, so
/// steps working on optionals must handle absence themselves (for example
/// with [`curried::optional::map`](crate::curried::optional::map)).
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Any number of steps is accepted, and the type of every intermediate
/// value is inferred. Each step only needs to implement [`FnOnce`].
///
/// # Examples
///
/// ```
/// use tryflow::pipe;
///
/// fn to_string(value: i32) -> String { value.to_string() }
/// fn get_length(text: String) -> usize { text.len() }
///
/// let result = pipe!(12345, to_string, get_length);
/// assert_eq!(result, 5);
/// ```
///
/// ## Absence flows through
///
/// ```
/// use tryflow::{curried, pipe};
///
/// let calls = std::cell::Cell::new(0);
/// let result = pipe!(
///     None::<i32>,
///     curried::optional::map(|value: i32| value + 1),
///     |value: Option<i32>| {
///         calls.set(calls.get() + 1);
///         value
///     },
///     curried::optional::unwrap_or(-1),
/// );
/// assert_eq!(result, -1);
/// assert_eq!(calls.get(), 1);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $step:expr $(,)?) => {
        ($step)($value)
    };

    ($value:expr, $step:expr, $($remaining_steps:expr),+ $(,)?) => {
        $crate::pipe!(($step)($value), $($remaining_steps),+)
    };
}

/// Threads an [`Outcome`](crate::outcome::Outcome) through outcome-producing steps.
///
/// Each step receives the success payload of the previous result and returns
/// a new `Outcome` with the same error type. As soon as a `Failure` is seen
/// (the initial value or any intermediate result), it is returned and the
/// remaining steps are neither evaluated nor called. The check looks at the
/// variant; nothing is unwound.
///
/// `try_pipe!(m, f, g)` is equivalent to `m.flat_map(f).flat_map(g)`.
///
/// # Syntax
///
/// - `try_pipe!(m)` - Returns `m` unchanged
/// - `try_pipe!(m, f, g, ...)` - Binds each step in turn
///
/// # Examples
///
/// ```
/// use tryflow::outcome::{Outcome, failure, success};
/// use tryflow::try_pipe;
///
/// let result: Outcome<String, &str> = try_pipe!(
///     success(10),
///     |value| success(value + 5),
///     |value| if value > 10 { success(value * 2) } else { failure("too small") },
///     |value| success(format!("result: {value}")),
/// );
/// assert_eq!(result, success("result: 30".to_string()));
/// ```
///
/// ## Short-circuit
///
/// ```
/// use tryflow::outcome::{Outcome, failure, success};
/// use tryflow::try_pipe;
///
/// let result: Outcome<i32, &str> = try_pipe!(
///     failure::<i32, &str>("early"),
///     |_: i32| -> Outcome<i32, &'static str> { unreachable!("skipped") },
///     |_: i32| -> Outcome<i32, &'static str> { unreachable!("skipped") },
/// );
/// assert_eq!(result, failure("early"));
/// ```
#[macro_export]
macro_rules! try_pipe {
    ($outcome:expr $(,)?) => {
        $outcome
    };

    ($outcome:expr, $($step:expr),+ $(,)?) => {
        'short_circuit: {
            let threaded = $outcome;
            $(
                let threaded = match threaded {
                    $crate::outcome::Outcome::Success(value) => ($step)(value),
                    $crate::outcome::Outcome::Failure(error) => {
                        break 'short_circuit $crate::outcome::Outcome::Failure(error);
                    }
                };
            )+
            threaded
        }
    };
}
