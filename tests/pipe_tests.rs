//! Integration tests for the `pipe!` and `try_pipe!` macros.

#![cfg(feature = "compose")]

use rstest::rstest;
use std::cell::RefCell;
use tryflow::compose::{constant, identity};
use tryflow::curried;
use tryflow::outcome::{Outcome, failure, success};
use tryflow::{pipe, try_pipe};

// =============================================================================
// pipe!
// =============================================================================

#[rstest]
fn pipe_value_only() {
    assert_eq!(pipe!(String::from("hello")), "hello");
}

#[rstest]
fn pipe_applies_steps_left_to_right() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }

    assert_eq!(pipe!(5, double, add_one), 11);
    assert_eq!(pipe!(5, add_one, double), 12);
}

#[rstest]
fn pipe_changes_type_at_each_step() {
    let result = pipe!(
        12345,
        |value: i32| value.to_string(),
        |text: String| text.len(),
        |length: usize| length % 2 == 1,
    );
    assert!(result);
}

#[rstest]
fn pipe_accepts_more_than_eight_steps() {
    let step = |value: i32| value + 1;
    let result = pipe!(0, step, step, step, step, step, step, step, step, step, step, step, step);
    assert_eq!(result, 12);
}

#[rstest]
fn pipe_runs_every_step_on_absence() {
    let seen = RefCell::new(Vec::new());
    let record = |value: Option<i32>| {
        seen.borrow_mut().push(value);
        value
    };

    let result = pipe!(None, record, curried::optional::map(|value: i32| value * 2), record);

    assert_eq!(result, None);
    assert_eq!(*seen.borrow(), vec![None, None]);
}

#[rstest]
fn pipe_does_not_short_circuit_on_failure() {
    let result = pipe!(
        failure::<i32, &str>("bad"),
        curried::outcome::map(|value: i32| value + 1),
        curried::outcome::unwrap_or(-1),
    );
    assert_eq!(result, -1);
}

#[rstest]
fn pipe_identity_is_neutral() {
    let square = |value: i32| value * value;
    assert_eq!(pipe!(7, identity, square, identity), pipe!(7, square));
}

// =============================================================================
// try_pipe!
// =============================================================================

fn parse(text: &str) -> Outcome<i32, String> {
    text.parse()
        .map_err(|_| format!("not a number: {text}"))
        .into()
}

fn positive(value: i32) -> Outcome<i32, String> {
    if value > 0 {
        success(value)
    } else {
        failure(format!("{value} is not positive"))
    }
}

fn reciprocal(value: i32) -> Outcome<f64, String> {
    success(1.0 / f64::from(value))
}

#[rstest]
#[case("4", success(0.25))]
#[case("-4", failure("-4 is not positive".to_string()))]
#[case("four", failure("not a number: four".to_string()))]
fn try_pipe_threads_until_failure(#[case] input: &str, #[case] expected: Outcome<f64, String>) {
    assert_eq!(try_pipe!(parse(input), positive, reciprocal), expected);
}

#[rstest]
fn try_pipe_skips_every_step_after_failure() {
    fn logged<'a>(
        log: &'a RefCell<Vec<&'static str>>,
        label: &'static str,
    ) -> impl Fn(i32) -> Outcome<i32, String> + 'a {
        move |value| {
            log.borrow_mut().push(label);
            success(value)
        }
    }

    let log = RefCell::new(Vec::new());
    let result = try_pipe!(
        success(1),
        logged(&log, "first"),
        |_: i32| failure("stop".to_string()),
        logged(&log, "third"),
        logged(&log, "fourth"),
    );

    assert_eq!(result, failure("stop".to_string()));
    assert_eq!(*log.borrow(), vec!["first"]);
}

#[rstest]
fn try_pipe_matches_flat_map_chain() {
    let chained = parse("12").flat_map(positive).flat_map(reciprocal);
    assert_eq!(try_pipe!(parse("12"), positive, reciprocal), chained);
}

#[rstest]
fn try_pipe_with_constant_step() {
    let result: Outcome<&str, String> = try_pipe!(parse("3"), constant(success("done")));
    assert_eq!(result, success("done"));
}
