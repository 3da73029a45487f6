//! Versioned property key tables.
//!
//! Every table version is its own `PropertyKey` enum in its own module, generated by
//! `property_keys!`. Codes from different versions therefore have different types and
//! cannot be mixed by accident. The [`KeyTable`] trait is the shared surface used by the
//! version-erased [`crate::PropertyKeyTable`], [`crate::keyset::PropertyKeySet`] and
//! [`crate::wire`].
//!
//! # Examples
//!
//! ```rust
//! use propkeys::tables::{current, legacy, KeyTable};
//!
//! let key = current::PropertyKey::Parameters;
//! assert_eq!(key.code(), 129);
//! assert_eq!(key.name(), "kPropertyParameters");
//! assert!(legacy::PropertyKey::from_name("kPropertyParameters").is_none());
//! ```

use std::{fmt, hash::Hash};

use serde::{de::DeserializeOwned, Serialize};
use strum::{EnumCount, IntoEnumIterator};

use crate::{Error, Result, TableVersion};

pub mod current;
pub mod legacy;

/// Prefix shared by every full property key name.
pub const NAME_PREFIX: &str = "kProperty";

/// One `(name, code)` pair of a table version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    /// Full key name, e.g. `kPropertyScrollDirection`
    pub name: &'static str,
    /// Integer code shared with the native engine
    pub code: u16,
}

impl Entry {
    /// Build the entry of `key`
    #[must_use]
    pub fn of<K: KeyTable>(key: K) -> Self {
        Entry {
            name: key.name(),
            code: key.code(),
        }
    }

    /// Document-facing short name, see [`short_name_of`]
    #[must_use]
    pub fn short_name(&self) -> String {
        short_name_of(self.name)
    }
}

/// Common interface of all versioned `PropertyKey` enums.
///
/// Implementations are generated; `code` and `name` are total over the enum and
/// `from_code` / `from_name` are their exact inverses.
pub trait KeyTable:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Serialize
    + DeserializeOwned
    + IntoEnumIterator
    + EnumCount
    + 'static
{
    /// The table version this enum encodes.
    const VERSION: TableVersion;

    /// Integer code of this key.
    fn code(self) -> u16;

    /// Full name of this key, e.g. `kPropertyScrollDirection`.
    fn name(self) -> &'static str;

    /// Key with the given code, if this version defines one.
    fn from_code(code: u16) -> Option<Self>;

    /// Key with the given full name, if this version defines one.
    fn from_name(name: &str) -> Option<Self>;

    /// Short name of this key, e.g. `scrollDirection`.
    fn short_name(self) -> String {
        short_name_of(self.name())
    }

    /// Key with the given short name, if this version defines one.
    fn from_short_name(short: &str) -> Option<Self> {
        full_name_of(short).and_then(|name| Self::from_name(&name))
    }

    /// Like [`KeyTable::from_code`], failing with [`Error::CodeNotFound`].
    fn lookup_code(code: u16) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| {
            log::debug!("property code {} is not defined in the {} table", code, Self::VERSION);
            Error::CodeNotFound {
                code,
                version: Self::VERSION,
            }
        })
    }

    /// Like [`KeyTable::from_name`], failing with [`Error::NameNotFound`].
    fn lookup_name(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| {
            log::debug!("property '{}' is not defined in the {} table", name, Self::VERSION);
            Error::NameNotFound {
                name: name.to_string(),
                version: Self::VERSION,
            }
        })
    }

    /// All entries of this version in ascending code order.
    fn entries() -> Vec<Entry> {
        Self::iter().map(Entry::of).collect()
    }
}

/// Strip the `kProperty` prefix and lower-case the first letter.
///
/// Names without the prefix are returned unchanged.
#[must_use]
pub fn short_name_of(name: &str) -> String {
    let Some(stem) = name.strip_prefix(NAME_PREFIX) else {
        return name.to_string();
    };

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Inverse of [`short_name_of`]. `None` unless `short` starts with a lower-case ASCII letter.
#[must_use]
pub fn full_name_of(short: &str) -> Option<String> {
    let mut chars = short.chars();
    let first = chars.next().filter(char::is_ascii_lowercase)?;
    Some(format!(
        "{}{}{}",
        NAME_PREFIX,
        first.to_ascii_uppercase(),
        chars.as_str()
    ))
}
