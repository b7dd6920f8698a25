//! The two-empty-representation [`Nullish`] type and the [`Null`] marker.

/// A library-specific null-like value.
///
/// `Null` is data: `Some(Null)` is a present optional. Only
/// [`optional::from`](super::from) treats [`Nullish::Null`] as absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Null;

/// A value, an explicit null, or a missing value.
///
/// Use it at the edge of the program, where external data distinguishes
/// "set to null" from "not provided". Convert to [`Optional`](super::Optional)
/// with [`optional::from`](super::from).
///
/// # Examples
///
/// ```rust
/// use tryflow::optional::Nullish;
///
/// let provided: Nullish<i32> = Nullish::Value(3);
/// let missing: Nullish<i32> = Nullish::default();
///
/// assert!(provided.is_value());
/// assert!(missing.is_absent());
/// assert!(Nullish::<i32>::Null.is_nullish());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Nullish<T> {
    /// A present value.
    Value(T),
    /// An explicit null.
    Null,
    /// No value was provided.
    #[default]
    Absent,
}

impl<T> Nullish<T> {
    /// Returns `true` for [`Nullish::Value`].
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` for [`Nullish::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for [`Nullish::Absent`].
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` for either empty representation.
    #[inline]
    pub const fn is_nullish(&self) -> bool {
        !self.is_value()
    }
}

impl<T> From<Option<T>> for Nullish<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Absent, Self::Value)
    }
}

impl<T> From<Null> for Nullish<T> {
    #[inline]
    fn from(_: Null) -> Self {
        Self::Null
    }
}

// =============================================================================
// Serde Support
// =============================================================================

// Missing fields need `#[serde(default)]` on the containing field to become `Absent`.

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Nullish<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Nullish<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let option = <Option<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(option.map_or(Self::Null, Self::Value))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Null {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_unit()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Null {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <() as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self)
    }
}
