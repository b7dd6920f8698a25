//! Reading and writing the `{ success, data | error }` record.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;

use super::{SafeParseResult, ShapeError};

const STRUCT_NAME: &str = "SafeParseResult";
const FIELDS: &[&str] = &["success", "data", "error"];

impl<T, E> serde::Serialize for SafeParseResult<T, E>
where
    T: serde::Serialize,
    E: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct(STRUCT_NAME, 2)?;
        match self {
            Self::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

enum Field {
    Success,
    Data,
    Error,
    Other,
}

struct FieldVisitor;

impl Visitor<'_> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a result field name")
    }

    fn visit_str<A>(self, field: &str) -> Result<Self::Value, A>
    where
        A: de::Error,
    {
        Ok(match field {
            "success" => Field::Success,
            "data" => Field::Data,
            "error" => Field::Error,
            _ => Field::Other,
        })
    }
}

impl<'de> serde::Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct ShapeVisitor<T, E> {
    marker: PhantomData<fn() -> SafeParseResult<T, E>>,
}

impl<'de, T, E> Visitor<'de> for ShapeVisitor<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    type Value = SafeParseResult<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a record with a `success` flag")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut success: Option<bool> = None;
        let mut data: Option<T> = None;
        let mut error: Option<E> = None;

        while let Some(field) = access.next_key::<Field>()? {
            match field {
                Field::Success => {
                    if success.is_some() {
                        return Err(de::Error::duplicate_field("success"));
                    }
                    success = Some(access.next_value()?);
                }
                Field::Data => {
                    if data.is_some() {
                        return Err(de::Error::duplicate_field("data"));
                    }
                    data = Some(access.next_value()?);
                }
                Field::Error => {
                    if error.is_some() {
                        return Err(de::Error::duplicate_field("error"));
                    }
                    error = Some(access.next_value()?);
                }
                Field::Other => {
                    access.next_value::<IgnoredAny>()?;
                }
            }
        }

        let Some(success) = success else {
            return Err(de::Error::missing_field("success"));
        };
        SafeParseResult::from_parts(success, data, error)
            .map_err(|shape: ShapeError| de::Error::missing_field(shape.field()))
    }
}

impl<'de, T, E> serde::Deserialize<'de> for SafeParseResult<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct(
            STRUCT_NAME,
            FIELDS,
            ShapeVisitor {
                marker: PhantomData,
            },
        )
    }
}
