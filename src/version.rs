use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{tables::KeyTable, Error};

/// Identifies one complete, internally consistent snapshot of the property key numbering.
///
/// The native engine is built against exactly one of these. Codes are only meaningful
/// together with their version; see [`crate::diff::translate`] for moving a code from one
/// version to another.
///
/// | Version   | Tags                  | Entries | Max code |
/// |-----------|-----------------------|---------|----------|
/// | `Current` | `current`, `a`        | 182     | 181      |
/// | `Legacy`  | `legacy`, `b`         | 175     | 174      |
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Default,
    EnumIter,
    EnumCount,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TableVersion {
    /// Version A, [`crate::tables::current`]
    #[default]
    Current,
    /// Version B, [`crate::tables::legacy`]
    Legacy,
}

impl TableVersion {
    /// Canonical lower-case tag, as accepted by [`FromStr`]
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            TableVersion::Current => "current",
            TableVersion::Legacy => "legacy",
        }
    }

    /// Number of keys defined by this version
    #[must_use]
    pub fn entry_count(self) -> usize {
        for_version!(self, K => K::COUNT)
    }

    /// Highest code defined by this version
    #[must_use]
    pub fn max_code(self) -> u16 {
        for_version!(self, K => K::iter().map(KeyTable::code).max().unwrap_or_default())
    }

    /// Iterate all known versions
    pub fn all() -> impl Iterator<Item = TableVersion> {
        TableVersion::iter()
    }
}

impl fmt::Display for TableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TableVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "a" => Ok(TableVersion::Current),
            "legacy" | "b" => Ok(TableVersion::Legacy),
            _ => Err(Error::UnknownVersion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(TableVersion::Current.entry_count(), 182);
        assert_eq!(TableVersion::Current.max_code(), 181);
        assert_eq!(TableVersion::Legacy.entry_count(), 175);
        assert_eq!(TableVersion::Legacy.max_code(), 174);
    }

    #[test]
    fn test_parse() {
        assert_eq!("current".parse::<TableVersion>().unwrap(), TableVersion::Current);
        assert_eq!(" Legacy ".parse::<TableVersion>().unwrap(), TableVersion::Legacy);
        assert_eq!("A".parse::<TableVersion>().unwrap(), TableVersion::Current);
        assert_eq!("b".parse::<TableVersion>().unwrap(), TableVersion::Legacy);

        let err = "v3".parse::<TableVersion>().unwrap_err();
        assert!(matches!(err, Error::UnknownVersion(ref tag) if tag == "v3"));
    }

    #[test]
    fn test_display_roundtrip() {
        for version in TableVersion::all() {
            assert_eq!(version.to_string().parse::<TableVersion>().unwrap(), version);
        }
        assert_eq!(TableVersion::default(), TableVersion::Current);
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&TableVersion::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
        let back: TableVersion = serde_json::from_str("\"current\"").unwrap();
        assert_eq!(back, TableVersion::Current);
    }
}
