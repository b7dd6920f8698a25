//! Bridge from `{ success, data | error }` result shapes.
//!
//! Validation libraries and RPC layers commonly report their results as a
//! record with a boolean `success` flag and either a `data` or an `error`
//! field. [`SafeParseResult`] models that record, and [`to_result`] turns it
//! into an [`Outcome`] so it can join the rest of a pipeline.
//!
//! # Examples
//!
//! ```rust
//! use tryflow::bridge::{SafeParseResult, to_result};
//! use tryflow::outcome::{failure, success};
//!
//! let parsed = SafeParseResult::<u16, String>::from_parts(true, Some(8080), None)?;
//! assert_eq!(to_result(parsed), success(8080));
//!
//! let rejected = SafeParseResult::<u16, String>::from_parts(false, None, Some("bad".into()))?;
//! assert_eq!(to_result(rejected), failure("bad".to_string()));
//! # Ok::<(), tryflow::bridge::ShapeError>(())
//! ```

#[cfg(feature = "serde")]
mod serde_support;

use std::fmt;

use crate::outcome::Outcome;

/// The external `{ success: bool, data | error }` result shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeParseResult<T, E> {
    /// `success` was `true`.
    Success {
        /// The parsed value.
        data: T,
    },
    /// `success` was `false`.
    Failure {
        /// What went wrong.
        error: E,
    },
}

impl<T, E> SafeParseResult<T, E> {
    /// Builds the shape from its raw parts.
    ///
    /// Only the field selected by `success` is consulted; the other one is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::MissingData`] when `success` is `true` without
    /// `data`, and [`ShapeError::MissingError`] when `success` is `false`
    /// without `error`.
    pub fn from_parts(success: bool, data: Option<T>, error: Option<E>) -> Result<Self, ShapeError> {
        if success {
            data.map(|data| Self::Success { data })
                .ok_or(ShapeError::MissingData)
        } else {
            error
                .map(|error| Self::Failure { error })
                .ok_or(ShapeError::MissingError)
        }
    }

    /// Returns the `success` flag of the shape.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl<T, E> From<SafeParseResult<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(shape: SafeParseResult<T, E>) -> Self {
        match shape {
            SafeParseResult::Success { data } => Self::Success(data),
            SafeParseResult::Failure { error } => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for SafeParseResult<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(data) => Self::Success { data },
            Outcome::Failure(error) => Self::Failure { error },
        }
    }
}

/// Converts a [`SafeParseResult`] into an [`Outcome`].
///
/// `data` becomes the success payload and `error` the failure payload. The
/// error is carried as-is, without being wrapped or reinterpreted.
#[inline]
pub fn to_result<T, E>(shape: SafeParseResult<T, E>) -> Outcome<T, E> {
    shape.into()
}

// =============================================================================
// ShapeError
// =============================================================================

/// A raw `{ success, data | error }` record was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeError {
    /// `success` was `true` but no `data` was present.
    MissingData,
    /// `success` was `false` but no `error` was present.
    MissingError,
}

impl ShapeError {
    /// Name of the missing field.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::MissingData => "data",
            Self::MissingError => "error",
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self {
            Self::MissingData => "true",
            Self::MissingError => "false",
        };
        write!(
            formatter,
            "`success` is {flag} but the `{}` field is missing",
            self.field()
        )
    }
}

impl std::error::Error for ShapeError {}
