//! # tryflow
//!
//! Outcome and Optional algebraic types with a library of pure, composable
//! operations and short-circuiting pipelines.
//!
//! ## Overview
//!
//! Failures and absent values are ordinary data here. Code that wants to
//! propagate them without panicking builds on:
//!
//! - **Outcome**: [`Outcome<T, E>`](outcome::Outcome), a success or a failure
//! - **Optional**: [`Optional<T>`](optional::Optional) plus the wider
//!   [`Nullish<T>`](optional::Nullish) used when bridging external data
//! - **Curried combinators**: data-last variants of every configurable operation
//! - **Composition**: `pipe!`, `try_pipe!`, `flow!`, `try_flow!` and their async forms
//! - **Bridge**: conversion of `{ success, data | error }` shapes into outcomes
//!
//! ## Feature Flags
//!
//! - `compose`: Pipeline macros and the dynamic pipeline
//! - `curried`: Data-last combinators
//! - `async`: `perform_async` and the async pipeline macros
//! - `serde`: Wire format for `Outcome`, `Nullish` and `SafeParseResult`
//! - `tracing`: Debug events at the panic capture boundary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tryflow::prelude::*;
//!
//! let result = try_pipe!(
//!     success::<i32, String>(10),
//!     |value| success(value + 5),
//!     |value| if value > 10 { success(value * 2) } else { failure("too small".to_string()) },
//!     |value| success(format!("result: {value}")),
//! );
//! assert_eq!(result, success("result: 30".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the types, constructors and macros. Curried combinators are
/// left under [`curried`] because their names overlap with the data-first
/// forms.
///
/// # Usage
///
/// ```rust
/// use tryflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bridge::{SafeParseResult, ShapeError, to_result};

    pub use crate::optional::{Null, Nullish, Optional, UnwrapAbsent};

    pub use crate::outcome::{
        CaughtPanic, Outcome, UnwrapFailure, failure, into_result, perform, success,
    };

    #[cfg(feature = "async")]
    pub use crate::outcome::perform_async;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod bridge;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "curried")]
pub mod curried;

pub mod optional;

pub mod outcome;

pub use outcome::Outcome;
