//! Optional values and their operations.
//!
//! [`Optional<T>`] is an alias for [`Option<T>`]: `None` is the single
//! normalized absent sentinel. External data sources often have *two* empty
//! representations (an explicit null and a missing field); [`Nullish<T>`]
//! keeps them apart until [`from`] collapses both into `None`.
//!
//! The library null marker [`Null`] is an ordinary value everywhere except at
//! that boundary, so `Some(Null)` is present, not absent.
//!
//! # Examples
//!
//! ```rust
//! use tryflow::optional::{self, Null, Nullish};
//!
//! assert_eq!(optional::from(Nullish::<i32>::Null), None);
//! assert_eq!(optional::from(Nullish::<i32>::Absent), None);
//! assert_eq!(optional::from(Nullish::Value(0)), Some(0));
//!
//! // A null marker nested as data is not absence.
//! assert_eq!(optional::from(Nullish::Value(Null)), Some(Null));
//!
//! let doubled = optional::map(Some(21), |value| value * 2);
//! assert_eq!(optional::unwrap_or(doubled, 0), 42);
//! ```

mod error;
mod nullish;
mod operations;

pub use error::UnwrapAbsent;
pub use nullish::{Null, Nullish};
pub use operations::{
    from, is_none, is_nullish, is_some, map, map_or, map_or_else, unwrap, unwrap_or,
    unwrap_or_else,
};

/// A value of type `T` or the absent sentinel `None`.
pub type Optional<T> = Option<T>;
