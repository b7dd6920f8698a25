//! Wire format for [`Outcome`].
//!
//! A success is `{"ok": true, "value": ...}` and a failure is
//! `{"ok": false, "error": ...}`. The payload field that does not belong to
//! the variant is never written, and is rejected when read.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;

use super::Outcome;

const STRUCT_NAME: &str = "Outcome";
const FIELDS: &[&str] = &["ok", "value", "error"];

impl<T, E> serde::Serialize for Outcome<T, E>
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
            Self::Success(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
            }
            Self::Failure(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

enum Field {
    Ok,
    Value,
    Error,
    Other,
}

struct FieldVisitor;

impl Visitor<'_> for FieldVisitor {
    type Value = Field;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an outcome field name")
    }

    fn visit_str<A>(self, field: &str) -> Result<Self::Value, A>
    where
        A: de::Error,
    {
        Ok(match field {
            "ok" => Field::Ok,
            "value" => Field::Value,
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

struct OutcomeVisitor<T, E> {
    marker: PhantomData<fn() -> Outcome<T, E>>,
}

impl<T, E> OutcomeVisitor<T, E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T, E> Visitor<'de> for OutcomeVisitor<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    type Value = Outcome<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an outcome with an `ok` discriminant")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut ok: Option<bool> = None;
        let mut value: Option<T> = None;
        let mut error: Option<E> = None;

        while let Some(field) = access.next_key::<Field>()? {
            match field {
                Field::Ok => {
                    if ok.is_some() {
                        return Err(de::Error::duplicate_field("ok"));
                    }
                    ok = Some(access.next_value()?);
                }
                Field::Value => {
                    if value.is_some() {
                        return Err(de::Error::duplicate_field("value"));
                    }
                    value = Some(access.next_value()?);
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

        match (ok, value, error) {
            (None, _, _) => Err(de::Error::missing_field("ok")),
            (Some(_), Some(_), Some(_)) => Err(de::Error::custom(
                "an outcome must not carry both `value` and `error`",
            )),
            (Some(true), Some(value), None) => Ok(Outcome::Success(value)),
            (Some(true), None, _) => Err(de::Error::missing_field("value")),
            (Some(false), None, Some(error)) => Ok(Outcome::Failure(error)),
            (Some(false), _, None) => Err(de::Error::missing_field("error")),
        }
    }
}

impl<'de, T, E> serde::Deserialize<'de> for Outcome<T, E>
where
    T: serde::Deserialize<'de>,
    E: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct(STRUCT_NAME, FIELDS, OutcomeVisitor::new())
    }
}
