//! Dynamically typed pipelines.
//!
//! The pipeline macros check every step at compile time. When the list of
//! steps is only known at runtime (built from configuration, collected
//! from plugins, longer than anyone wants to spell out), [`DynPipeline`]
//! holds type-erased steps instead and checks each hand-off when it runs.
//!
//! A type mismatch between two steps is reported as a
//! [`PipelineTypeError`] naming the step whose input did not fit; it never
//! panics.
//!
//! # Examples
//!
//! ```
//! use tryflow::compose::{DynPipeline, DynStep};
//! use tryflow::outcome::success;
//!
//! let steps = vec![
//!     DynStep::map(|value: i32| value + 1),
//!     DynStep::map(|value: i32| value * 2),
//!     DynStep::map(|value: i32| format!("={value}")),
//! ];
//! let pipeline: DynPipeline = steps.into_iter().collect();
//!
//! assert_eq!(pipeline.run::<i32, String>(4), success("=10".to_string()));
//! assert!(pipeline.run::<&str, String>("4").is_failure());
//! ```

use std::any::{Any, type_name};
use std::fmt;

use crate::outcome::Outcome;

type ErasedValue = Box<dyn Any>;

type ErasedFunction = Box<dyn Fn(ErasedValue) -> Option<ErasedValue>>;

// =============================================================================
// Error
// =============================================================================

/// A step received a value of a type it does not accept.
///
/// `step` is the zero-based index of the step that rejected its input. When
/// the final value does not have the type requested from
/// [`DynPipeline::run`], `step` equals the pipeline length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineTypeError {
    step: usize,
    expected: &'static str,
}

impl PipelineTypeError {
    /// Index of the rejecting step.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Name of the type that was expected at that position.
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        self.expected
    }
}

impl fmt::Display for PipelineTypeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "pipeline step {} expected a value of type `{}`",
            self.step, self.expected
        )
    }
}

impl std::error::Error for PipelineTypeError {}

// =============================================================================
// DynStep
// =============================================================================

/// A single type-erased pipeline step.
pub struct DynStep {
    input_type: &'static str,
    function: ErasedFunction,
}

impl DynStep {
    /// Wraps a plain function of the threaded value.
    pub fn map<A, B, F>(function: F) -> Self
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Self {
            input_type: type_name::<A>(),
            function: Box::new(move |input: ErasedValue| {
                input
                    .downcast::<A>()
                    .ok()
                    .map(|value| Box::new(function(*value)) as ErasedValue)
            }),
        }
    }

    /// Wraps an outcome-producing function.
    ///
    /// The step expects the threaded value to be an `Outcome<A, E>`. A
    /// `Success` payload is handed to `function`; a `Failure` is passed on
    /// as an `Outcome<B, E>` without calling it.
    pub fn bind<A, B, E, F>(function: F) -> Self
    where
        A: 'static,
        B: 'static,
        E: 'static,
        F: Fn(A) -> Outcome<B, E> + 'static,
    {
        Self {
            input_type: type_name::<Outcome<A, E>>(),
            function: Box::new(move |input: ErasedValue| {
                input
                    .downcast::<Outcome<A, E>>()
                    .ok()
                    .map(|outcome| Box::new(outcome.flat_map(&function)) as ErasedValue)
            }),
        }
    }

    /// Name of the input type this step accepts.
    #[must_use]
    pub const fn input_type(&self) -> &'static str {
        self.input_type
    }
}

impl fmt::Debug for DynStep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DynStep")
            .field("input_type", &self.input_type)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DynPipeline
// =============================================================================

/// A reusable, ordered list of [`DynStep`]s.
#[derive(Debug, Default)]
pub struct DynPipeline {
    steps: Vec<DynStep>,
}

impl DynPipeline {
    /// Creates an empty pipeline. Running it returns the input unchanged.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step.
    #[must_use]
    pub fn then(mut self, step: DynStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when the pipeline has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs every step on `input` and returns the final value as a `Z`.
    ///
    /// # Errors
    ///
    /// Returns `Failure(PipelineTypeError)` as soon as a step is handed a
    /// value it does not accept, or when the final value is not a `Z`. The
    /// remaining steps are not called.
    pub fn run<A, Z>(&self, input: A) -> Outcome<Z, PipelineTypeError>
    where
        A: 'static,
        Z: 'static,
    {
        let mut threaded: ErasedValue = Box::new(input);

        for (index, step) in self.steps.iter().enumerate() {
            threaded = match (step.function)(threaded) {
                Some(next) => next,
                None => {
                    return Outcome::Failure(PipelineTypeError {
                        step: index,
                        expected: step.input_type,
                    });
                }
            };
        }

        match threaded.downcast::<Z>() {
            Ok(output) => Outcome::Success(*output),
            Err(_) => Outcome::Failure(PipelineTypeError {
                step: self.steps.len(),
                expected: type_name::<Z>(),
            }),
        }
    }
}

impl FromIterator<DynStep> for DynPipeline {
    fn from_iter<I: IntoIterator<Item = DynStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Extend<DynStep> for DynPipeline {
    fn extend<I: IntoIterator<Item = DynStep>>(&mut self, iter: I) {
        self.steps.extend(iter);
    }
}

/// Runs `steps` on `initial` in one call.
///
/// # Errors
///
/// See [`DynPipeline::run`].
///
/// # Examples
///
/// ```
/// use tryflow::compose::{DynStep, pipe_dyn};
/// use tryflow::outcome::success;
///
/// let steps = (1..=3).map(|n: i32| DynStep::map(move |value: i32| value * n));
/// assert_eq!(pipe_dyn::<i32, i32>(1, steps), success(6));
/// ```
pub fn pipe_dyn<A, Z>(
    initial: A,
    steps: impl IntoIterator<Item = DynStep>,
) -> Outcome<Z, PipelineTypeError>
where
    A: 'static,
    Z: 'static,
{
    steps.into_iter().collect::<DynPipeline>().run(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use rstest::rstest;

    #[rstest]
    fn test_empty_pipeline_returns_input() {
        let pipeline = DynPipeline::new();
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run::<i32, i32>(7), success(7));
    }

    #[rstest]
    fn test_then_appends_in_order() {
        let pipeline = DynPipeline::new()
            .then(DynStep::map(|value: i32| value + 1))
            .then(DynStep::map(|value: i32| value * 10));
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline.run::<i32, i32>(1), success(20));
    }

    #[rstest]
    fn test_mismatch_reports_step_index() {
        let pipeline = DynPipeline::new()
            .then(DynStep::map(|value: i32| value.to_string()))
            .then(DynStep::map(|value: i32| value + 1));

        let error = pipeline.run::<i32, i32>(1).into_error();
        assert_eq!(
            error,
            Some(PipelineTypeError {
                step: 1,
                expected: "i32"
            })
        );
    }

    #[rstest]
    fn test_final_type_mismatch() {
        let pipeline = DynPipeline::new().then(DynStep::map(|value: i32| value + 1));
        let error = pipeline.run::<i32, String>(1).into_error();
        assert_eq!(error.map(|error| error.step()), Some(1));
    }

    #[rstest]
    fn test_bind_passes_failure_through() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = std::rc::Rc::clone(&calls);
        let pipeline = DynPipeline::new()
            .then(DynStep::bind(|value: i32| -> Outcome<i32, String> {
                if value > 0 {
                    success(value)
                } else {
                    failure(format!("{value} is not positive"))
                }
            }))
            .then(DynStep::bind(move |value: i32| -> Outcome<i32, String> {
                counter.set(counter.get() + 1);
                success(value * 2)
            }));

        assert_eq!(
            pipeline.run::<Outcome<i32, String>, Outcome<i32, String>>(success(3)),
            success(success(6))
        );
        assert_eq!(
            pipeline.run::<Outcome<i32, String>, Outcome<i32, String>>(success(-3)),
            success(failure("-3 is not positive".to_string()))
        );
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_bind_rejects_plain_value() {
        let pipeline = DynPipeline::new().then(DynStep::bind(|value: i32| success::<i32, ()>(value)));
        let error = pipeline.run::<i32, Outcome<i32, ()>>(1).into_error();
        assert_eq!(error.map(|error| error.step()), Some(0));
    }

    #[rstest]
    fn test_error_display() {
        let error = PipelineTypeError {
            step: 2,
            expected: "u8",
        };
        assert_eq!(
            error.to_string(),
            "pipeline step 2 expected a value of type `u8`"
        );
    }

    #[rstest]
    fn test_step_debug_names_input_type() {
        let step = DynStep::map(|value: u16| value);
        assert_eq!(step.input_type(), "u16");
        assert!(format!("{step:?}").contains("u16"));
    }
}
