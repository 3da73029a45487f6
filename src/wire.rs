//! Encoding of property keys at the binding boundary.
//!
//! Keys cross the boundary as their integer codes. A list of dirty properties travels as a
//! JSON array of codes, either bare (`[29,175]`) or wrapped in a message object
//! (`{"dirtyProperties":[29,175]}`). Decoding always resolves codes against one explicit
//! table version and fails on the first code that version does not define.
//!
//! # Examples
//!
//! ```rust
//! use propkeys::{tables::current::PropertyKey, wire};
//!
//! let json = wire::to_json(&[PropertyKey::Color, PropertyKey::Width])?;
//! assert_eq!(json, "[29,175]");
//!
//! let keys: Vec<PropertyKey> = wire::from_json(&json)?;
//! assert_eq!(keys, [PropertyKey::Color, PropertyKey::Width]);
//! # Ok::<(), propkeys::Error>(())
//! ```

use std::{fmt, marker::PhantomData};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{keyset::PropertyKeySet, tables::KeyTable, Result};

/// Member name of the key list in a [`DirtyProperties`] message.
pub const DIRTY_PROPERTIES_KEY: &str = "dirtyProperties";

/// Codes of `keys`, in iteration order.
pub fn encode_codes<K: KeyTable>(keys: impl IntoIterator<Item = K>) -> Vec<u16> {
    keys.into_iter().map(KeyTable::code).collect()
}

/// Resolve `codes` against the table version of `K`.
///
/// # Errors
/// Returns [`crate::Error::CodeNotFound`] for the first code `K` does not define.
pub fn decode_codes<K: KeyTable>(codes: &[u16]) -> Result<Vec<K>> {
    codes
        .iter()
        .map(|&code| {
            K::lookup_code(code).inspect_err(|_| {
                log::warn!(
                    "rejecting payload: code {} is not defined in the {} table",
                    code,
                    K::VERSION
                );
            })
        })
        .collect()
}

/// Encode `keys` as a bare JSON array of codes.
///
/// # Errors
/// Returns [`crate::Error::Json`] if serialization fails.
pub fn to_json<K: KeyTable>(keys: &[K]) -> Result<String> {
    Ok(serde_json::to_string(&encode_codes(keys.iter().copied()))?)
}

/// Decode a bare JSON array of codes.
///
/// # Errors
/// Returns [`crate::Error::Json`] if `text` is not an array of integers in `u16` range, and
/// [`crate::Error::CodeNotFound`] if a code is not defined by `K`'s version.
pub fn from_json<K: KeyTable>(text: &str) -> Result<Vec<K>> {
    let codes: Vec<u16> = serde_json::from_str(text)?;
    decode_codes(&codes)
}

/// Decode either a bare array of codes or a [`DirtyProperties`] message.
///
/// # Errors
/// Returns [`crate::Error::Malformed`] if the payload is neither shape, plus the errors of
/// [`from_json`].
pub fn decode_payload<K: KeyTable>(text: &str) -> Result<Vec<K>> {
    let value: Value = serde_json::from_str(text)?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove(DIRTY_PROPERTIES_KEY) {
            Some(list @ Value::Array(_)) => list,
            Some(_) => {
                return Err(malformed_error!(
                    "'{}' must be an array of codes",
                    DIRTY_PROPERTIES_KEY
                ))
            }
            None => {
                return Err(malformed_error!(
                    "payload object has no '{}' member",
                    DIRTY_PROPERTIES_KEY
                ))
            }
        },
        _ => {
            return Err(malformed_error!(
                "payload must be an array or an object, found {}",
                kind_of(&value)
            ))
        }
    };

    let codes: Vec<u16> = serde_json::from_value(list)?;
    decode_codes(&codes)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Message announcing the dirty properties of one component.
///
/// Serializes as `{"dirtyProperties":[codes]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirtyProperties<K: KeyTable> {
    /// Dirty keys, ascending by code when built from a set
    #[serde(bound = "")]
    pub dirty_properties: Vec<K>,
}

impl<K: KeyTable> DirtyProperties<K> {
    /// Message listing the members of `set`
    #[must_use]
    pub fn from_set(set: &PropertyKeySet<K>) -> Self {
        DirtyProperties {
            dirty_properties: set.iter().collect(),
        }
    }

    /// The listed keys as a set
    #[must_use]
    pub fn to_set(&self) -> PropertyKeySet<K> {
        self.dirty_properties.iter().copied().collect()
    }

    /// Encode as JSON.
    ///
    /// # Errors
    /// Returns [`crate::Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON, see [`decode_payload`].
    ///
    /// # Errors
    /// See [`decode_payload`].
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(DirtyProperties {
            dirty_properties: decode_payload(text)?,
        })
    }
}

pub(crate) fn serialize_key<K: KeyTable, S: Serializer>(
    key: K,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u16(key.code())
}

pub(crate) fn deserialize_key<'de, K: KeyTable, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<K, D::Error> {
    deserializer.deserialize_any(KeyVisitor(PhantomData))
}

/// Accepts an integer code or a full key name.
struct KeyVisitor<K>(PhantomData<K>);

impl<K: KeyTable> de::Visitor<'_> for KeyVisitor<K> {
    type Value = K;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a property code or name of the {} table", K::VERSION)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<K, E> {
        u16::try_from(v)
            .ok()
            .and_then(K::from_code)
            .ok_or_else(|| {
                E::custom(format!(
                    "property code {} is not defined in the {} table",
                    v,
                    K::VERSION
                ))
            })
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<K, E> {
        match u64::try_from(v) {
            Ok(v) => de::Visitor::visit_u64(self, v),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<K, E> {
        K::from_name(v).ok_or_else(|| {
            E::custom(format!(
                "property '{}' is not defined in the {} table",
                v,
                K::VERSION
            ))
        })
    }
}
