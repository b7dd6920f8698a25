//! Error types raised or captured at the panic boundary.
//!
//! - [`UnwrapFailure`]: the panic payload of [`Outcome::unwrap`](super::Outcome::unwrap)
//! - [`CaughtPanic`]: a panic captured by [`perform`](super::perform)

use std::any::Any;
use std::fmt;

// =============================================================================
// UnwrapFailure
// =============================================================================

/// Raised when a `Failure` outcome is unwrapped.
///
/// The original failure payload is kept as the cause. When `E` is itself an
/// error, it is also exposed through [`std::error::Error::source`].
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::{UnwrapFailure, failure};
///
/// let error = failure::<i32, &str>("bad").try_unwrap().unwrap_err();
/// assert_eq!(*error.cause(), "bad");
/// assert_eq!(
///     error.to_string(),
///     "called `Outcome::unwrap()` on a `Failure` value: \"bad\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnwrapFailure<E> {
    cause: E,
}

impl<E> UnwrapFailure<E> {
    /// Wraps the failure payload.
    #[inline]
    pub const fn new(cause: E) -> Self {
        Self { cause }
    }

    /// The failure payload that was unwrapped.
    #[inline]
    pub const fn cause(&self) -> &E {
        &self.cause
    }

    /// Consumes the error and returns the failure payload.
    #[inline]
    pub fn into_cause(self) -> E {
        self.cause
    }
}

impl<E: fmt::Debug> fmt::Display for UnwrapFailure<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "called `Outcome::unwrap()` on a `Failure` value: {:?}",
            self.cause
        )
    }
}

impl<E> std::error::Error for UnwrapFailure<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

// =============================================================================
// CaughtPanic
// =============================================================================

/// A panic captured by [`perform`](super::perform) or `perform_async`.
///
/// The raw payload is kept untouched. String payloads (from `panic!`) are
/// readable through [`message`](Self::message); any other payload, such as an
/// [`UnwrapFailure`] raised with `panic_any`, is reachable through
/// [`downcast_ref`](Self::downcast_ref) and can be re-raised with
/// [`resume`](Self::resume).
///
/// # Examples
///
/// ```rust
/// use tryflow::outcome::perform;
///
/// let caught = perform(|| -> i32 { panic!("exploded") }).into_error().unwrap();
/// assert_eq!(caught.message(), Some("exploded"));
/// ```
pub struct CaughtPanic {
    payload: Box<dyn Any + Send>,
}

impl CaughtPanic {
    /// Wraps a payload returned by [`std::panic::catch_unwind`].
    #[inline]
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// The panic message, when the payload is a `&'static str` or a `String`.
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload
                .downcast_ref::<String>()
                .map(String::as_str)
        }
    }

    /// Returns `true` if the payload is of type `P`.
    #[inline]
    pub fn is<P: Any>(&self) -> bool {
        self.payload.is::<P>()
    }

    /// Borrows the payload as a `P`, if it is one.
    #[inline]
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.payload.downcast_ref::<P>()
    }

    /// Takes the payload as a `P`, or hands `self` back unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the payload is not a `P`.
    pub fn downcast<P: Any>(self) -> Result<P, Self> {
        self.payload
            .downcast::<P>()
            .map(|payload| *payload)
            .map_err(Self::new)
    }

    /// Consumes the value and returns the raw payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Re-raises the original panic.
    ///
    /// The panic hook is not invoked again.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CaughtPanic")
            .field("message", &self.message())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CaughtPanic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(formatter, "panicked: {message}"),
            None => formatter.write_str("panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for CaughtPanic {}
