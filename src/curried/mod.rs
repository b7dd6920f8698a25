//! Data-last variants of the outcome and optional operations.
//!
//! Each function here takes the configuration arguments of an operation
//! (the transform, the default, the fallback) and returns a closure awaiting
//! the subject. They are pure re-orderings of the data-first forms:
//!
//! ```text
//! curried::outcome::map(f)(subject) == subject.map(f)
//! curried::optional::map_or(default, f)(subject) == optional::map_or(subject, default, f)
//! ```
//!
//! The returned closures implement [`Fn`], so one closure can be reused
//! inside [`pipe!`](crate::pipe) chains or handed to [`Iterator::map`].
//! Configuration functions must therefore be [`Fn`] and default values
//! [`Clone`].
//!
//! # Examples
//!
//! ```rust
//! use tryflow::curried;
//! use tryflow::outcome::{Outcome, failure, success};
//! use tryflow::pipe;
//!
//! let outcomes: Vec<Outcome<i32, &str>> = vec![success(1), failure("bad"), success(3)];
//! let doubled: Vec<i32> = outcomes
//!     .into_iter()
//!     .map(curried::outcome::map(|value: i32| value * 2))
//!     .map(curried::outcome::unwrap_or(0))
//!     .collect();
//! assert_eq!(doubled, vec![2, 0, 6]);
//!
//! let label = pipe!(
//!     Some(4),
//!     curried::optional::map(|value: i32| value + 1),
//!     curried::optional::map_or(String::from("none"), |value: i32| value.to_string()),
//! );
//! assert_eq!(label, "5");
//! ```

pub mod optional;
pub mod outcome;
