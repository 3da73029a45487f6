//! Table selection and name matching policy.
//!
//! A [`TableConfig`] picks the table version a [`crate::PropertyKeyTable`] resolves against
//! and whether document-style short names (`scrollDirection`) are accepted next to full
//! names (`kPropertyScrollDirection`). Short names are not part of any table, so they are
//! opt-in; by default an unrecognized name fails with [`crate::Error::NameNotFound`].
//!
//! # Presets
//!
//! | Preset                        | Version   | Short names |
//! |-------------------------------|-----------|-------------|
//! | [`TableConfig::default`]      | `Current` | no          |
//! | [`TableConfig::new`]          | given     | no          |
//! | [`TableConfig::relaxed`]      | given     | yes         |
//! | [`TableConfig::from_env`]     | env / `Current` | no    |

use std::env;

use crate::{Error, Result, TableVersion};

/// Environment variable read by [`TableConfig::from_env`].
pub const TABLE_VERSION_ENV: &str = "PROPKEYS_TABLE_VERSION";

/// Configuration for a [`crate::PropertyKeyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableConfig {
    /// The table version lookups resolve against
    pub version: TableVersion,
    /// Accept short names (`scrollDirection`) in name lookups
    pub accept_short_names: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(TableVersion::default())
    }
}

impl TableConfig {
    /// Resolve against `version`, accepting full names only.
    #[must_use]
    pub fn new(version: TableVersion) -> Self {
        TableConfig {
            version,
            accept_short_names: false,
        }
    }

    /// Resolve against `version`, accepting full and short names.
    #[must_use]
    pub fn relaxed(version: TableVersion) -> Self {
        TableConfig {
            version,
            accept_short_names: true,
        }
    }

    /// Set whether short names are accepted.
    #[must_use]
    pub fn with_short_names(mut self, accept: bool) -> Self {
        self.accept_short_names = accept;
        self
    }

    /// Read the version from [`TABLE_VERSION_ENV`].
    ///
    /// An unset variable selects the default version.
    ///
    /// # Errors
    /// Returns [`Error::UnknownVersion`] if the variable is set to an unrecognized tag or is
    /// not valid unicode.
    pub fn from_env() -> Result<Self> {
        match env::var(TABLE_VERSION_ENV) {
            Ok(tag) => Self::from_env_value(Some(&tag)),
            Err(env::VarError::NotPresent) => Self::from_env_value(None),
            Err(env::VarError::NotUnicode(raw)) => Err(Error::UnknownVersion(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(tag) if !tag.trim().is_empty() => Ok(Self::new(tag.parse()?)),
            _ => Ok(Self::default()),
        }
    }
}
