//! The `flow!` and `try_flow!` macros: pipelines without an initial value.
//!
//! Where [`pipe!`](crate::pipe) applies steps to a value right away, `flow!`
//! builds the function that will do so later:
//!
//! ```text
//! flow!(f, g, h)(x) == pipe!(x, f, g, h)
//! try_flow!(f, g)(m) == try_pipe!(m, f, g)
//! ```

/// Composes steps left to right into a single function.
///
/// The returned closure implements [`Fn`] when every step does, so it can be
/// called repeatedly or passed to [`Iterator::map`].
///
/// # Syntax
///
/// - `flow!(f)` - Returns `f`
/// - `flow!(f, g, ...)` - Returns `move |x| ...g(f(x))`
///
/// # Examples
///
/// ```
/// use tryflow::flow;
///
/// let normalize = flow!(
///     |text: &str| text.trim().to_string(),
///     |text: String| text.to_lowercase(),
///     |text: String| text.replace(' ', "-"),
/// );
///
/// assert_eq!(normalize("  Hello World "), "hello-world");
/// assert_eq!(normalize("Rust"), "rust");
/// ```
#[macro_export]
macro_rules! flow {
    ($step:expr $(,)?) => {
        $step
    };

    ($step:expr, $($remaining_steps:expr),+ $(,)?) => {{
        let first = $step;
        let rest = $crate::flow!($($remaining_steps),+);
        move |input| rest(first(input))
    }};
}

/// Composes outcome-producing steps into a function over [`Outcome`](crate::outcome::Outcome).
///
/// The returned closure takes an `Outcome`, hands its success payload to the
/// first step, and so on; a `Failure` passes through every remaining stage
/// without calling its step.
///
/// # Examples
///
/// ```
/// use tryflow::outcome::{Outcome, failure, success};
/// use tryflow::try_flow;
///
/// let parse_port = try_flow!(
///     |text: &str| -> Outcome<u32, String> {
///         text.parse::<u32>().map_err(|error| error.to_string()).into()
///     },
///     |port: u32| if port <= 65535 { success(port) } else { failure(format!("{port} is out of range")) },
/// );
///
/// assert_eq!(parse_port(success("8080")), success(8080));
/// assert_eq!(parse_port(success("70000")), failure("70000 is out of range".to_string()));
/// assert_eq!(parse_port(failure("no input".to_string())), failure("no input".to_string()));
/// ```
#[macro_export]
macro_rules! try_flow {
    ($step:expr $(,)?) => {{
        let step = $step;
        move |outcome| match outcome {
            $crate::outcome::Outcome::Success(value) => step(value),
            $crate::outcome::Outcome::Failure(error) => $crate::outcome::Outcome::Failure(error),
        }
    }};

    ($step:expr, $($remaining_steps:expr),+ $(,)?) => {{
        let first = $crate::try_flow!($step);
        let rest = $crate::try_flow!($($remaining_steps),+);
        move |outcome| rest(first(outcome))
    }};
}

#[cfg(test)]
mod tests {
    use crate::outcome::{Outcome, failure, success};
    use crate::pipe;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_flow_single() {
        let double = flow!(|x: i32| x * 2);
        assert_eq!(double(5), 10);
    }

    #[rstest]
    fn test_flow_matches_pipe() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = flow!(add_one, double);
        assert_eq!(composed(5), pipe!(5, add_one, double));
    }

    #[rstest]
    fn test_flow_reusable_in_iterator() {
        let describe = flow!(|x: i32| x * x, |x: i32| format!("<{x}>"));
        let described: Vec<String> = (1..=3).map(describe).collect();
        assert_eq!(described, vec!["<1>", "<4>", "<9>"]);
    }

    #[rstest]
    fn test_try_flow_skips_steps_after_failure() {
        let calls = Cell::new(0);
        let checked = try_flow!(
            |value: i32| -> Outcome<i32, &'static str> {
                if value > 0 { success(value) } else { failure("not positive") }
            },
            |value: i32| -> Outcome<i32, &'static str> {
                calls.set(calls.get() + 1);
                success(value * 10)
            },
        );

        assert_eq!(checked(success(2)), success(20));
        assert_eq!(checked(success(-2)), failure("not positive"));
        assert_eq!(checked(failure("upstream")), failure("upstream"));
        assert_eq!(calls.get(), 1);
    }
}
