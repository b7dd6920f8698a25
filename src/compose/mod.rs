//! Left-to-right composition of steps.
//!
//! # Overview
//!
//! | Macro | Input | Steps | Stops early |
//! |-------|-------|-------|-------------|
//! | [`pipe!`] | any value | `T -> U` | never |
//! | [`try_pipe!`] | `Outcome<T, E>` | `T -> Outcome<U, E>` | on `Failure` |
//! | [`flow!`] | (returns a function) | `T -> U` | never |
//! | [`try_flow!`] | (returns a function) | `T -> Outcome<U, E>` | on `Failure` |
//! | [`pipe_async!`] | any value | `T -> impl IntoFuture<Output = U>` | never |
//! | [`try_pipe_async!`] | `Outcome<T, E>` | `T -> impl IntoFuture<Output = Outcome<U, E>>` | on `Failure` |
//! | [`flow_async!`] / [`try_flow_async!`] | (returns a function) | as above | as above |
//!
//! The threading policy is chosen by the entry point, not by the runtime
//! shape of the value: [`pipe!`] never inspects what it threads, so an
//! absent [`Optional`](crate::optional::Optional) or a `Failure` is handed
//! to the next step like any other value.
//!
//! Every macro accepts any number of steps and infers each intermediate
//! type. [`DynPipeline`] covers step lists assembled at runtime, trading
//! static checking for a runtime [`PipelineTypeError`].
//!
//! # Helper Functions
//!
//! - [`identity`]
//! - [`constant`]
//! - [`lift_sync`]
//!
//! # Examples
//!
//! ```
//! use tryflow::outcome::{Outcome, failure, success};
//! use tryflow::{pipe, try_pipe};
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse().map_err(|_| format!("not a number: {text}")).into()
//! }
//!
//! fn positive(value: i32) -> Outcome<i32, String> {
//!     if value > 0 { success(value) } else { failure(format!("{value} is not positive")) }
//! }
//!
//! assert_eq!(pipe!(" 42 ", str::trim, parse), success(42));
//! assert_eq!(try_pipe!(parse("-1"), positive), failure("-1 is not positive".to_string()));
//! ```

mod dynamic;
mod flow_macro;
#[cfg(feature = "async")]
mod pipe_async_macro;
mod pipe_macro;
mod utils;

pub use dynamic::{DynPipeline, DynStep, PipelineTypeError, pipe_dyn};
pub use utils::{constant, identity, lift_sync};

pub use crate::{flow, pipe, try_flow, try_pipe};

#[cfg(feature = "async")]
pub use crate::{flow_async, pipe_async, try_flow_async, try_pipe_async};
