//! Panic payload raised by [`unwrap`](super::unwrap) on an absent value.

use std::fmt;

const ABSENT_CAUSE: &str = "value is absent";

/// Raised (as a panic payload) when an absent [`Optional`](super::Optional) is unwrapped.
///
/// The payload can be recovered with [`std::panic::catch_unwind`] and
/// `downcast_ref::<UnwrapAbsent>()`.
///
/// # Examples
///
/// ```rust
/// use tryflow::optional::{self, UnwrapAbsent};
///
/// let payload = std::panic::catch_unwind(|| optional::unwrap::<i32>(None)).unwrap_err();
/// let error = payload.downcast_ref::<UnwrapAbsent>().unwrap();
/// assert_eq!(error.cause(), "value is absent");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnwrapAbsent;

impl UnwrapAbsent {
    /// Creates the error.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Text describing why the unwrap failed.
    #[inline]
    pub const fn cause(&self) -> &'static str {
        ABSENT_CAUSE
    }
}

impl fmt::Display for UnwrapAbsent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "called `optional::unwrap()` on an absent value: {}",
            self.cause()
        )
    }
}

impl std::error::Error for UnwrapAbsent {}
