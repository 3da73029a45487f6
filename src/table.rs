//! Version-erased lookups over one property key table.
//!
//! [`PropertyKeyTable`] is the runtime counterpart of the typed `PropertyKey` enums: the
//! version is a value chosen from configuration rather than a type chosen at compile time.
//! Use it at the binding boundary, where names and codes arrive as plain strings and
//! integers.
//!
//! # Examples
//!
//! ```rust
//! use propkeys::{PropertyKeyTable, TableVersion};
//!
//! let table = PropertyKeyTable::new(TableVersion::Current);
//! let code = table.code_of("kPropertyOpacity")?;
//! assert_eq!(table.name_of(code)?, "kPropertyOpacity");
//! assert!(table.code_of("opacity").is_err());
//! # Ok::<(), propkeys::Error>(())
//! ```

use strum::EnumCount;

use crate::{
    config::TableConfig,
    tables::{Entry, KeyTable},
    Error, Result, TableVersion,
};

/// Name/code lookups against the table version selected by a [`TableConfig`].
///
/// `code_of` and `name_of` are mutually inverse over the table's entries. Anything outside
/// that domain fails with [`Error::NameNotFound`] or [`Error::CodeNotFound`]; no value is
/// ever guessed from another version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertyKeyTable {
    config: TableConfig,
}

impl PropertyKeyTable {
    /// Table for `version` matching full names only.
    #[must_use]
    pub fn new(version: TableVersion) -> Self {
        Self::with_config(TableConfig::new(version))
    }

    /// Table configured by `config`.
    #[must_use]
    pub fn with_config(config: TableConfig) -> Self {
        PropertyKeyTable { config }
    }

    /// The selected table version.
    #[must_use]
    pub fn version(&self) -> TableVersion {
        self.config.version
    }

    /// The configuration this table was built from.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Code of the key called `name`.
    ///
    /// Accepts the full name, and the short name if the configuration allows it.
    ///
    /// # Errors
    /// Returns [`Error::NameNotFound`] if the selected version defines no such key.
    pub fn code_of(&self, name: &str) -> Result<u16> {
        for_version!(self.version(), K => self.resolve::<K>(name).map(KeyTable::code))
    }

    /// Full name of the key with `code`.
    ///
    /// # Errors
    /// Returns [`Error::CodeNotFound`] if the selected version defines no such code.
    pub fn name_of(&self, code: u16) -> Result<&'static str> {
        for_version!(self.version(), K => K::lookup_code(code).map(KeyTable::name))
    }

    /// Entry of the key called `name`, see [`PropertyKeyTable::code_of`].
    ///
    /// # Errors
    /// Returns [`Error::NameNotFound`] if the selected version defines no such key.
    pub fn entry_of(&self, name: &str) -> Result<Entry> {
        for_version!(self.version(), K => self.resolve::<K>(name).map(Entry::of))
    }

    /// Returns true if `name` resolves in the selected version.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        for_version!(self.version(), K => self.find::<K>(name).is_some())
    }

    /// Returns true if `code` is defined in the selected version.
    #[must_use]
    pub fn contains_code(&self, code: u16) -> bool {
        for_version!(self.version(), K => K::from_code(code).is_some())
    }

    /// All entries of the selected version in ascending code order.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        for_version!(self.version(), K => K::entries())
    }

    /// Number of keys in the selected version.
    #[must_use]
    pub fn len(&self) -> usize {
        for_version!(self.version(), K => K::COUNT)
    }

    /// Returns true if the selected version defines no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find<K: KeyTable>(&self, name: &str) -> Option<K> {
        K::from_name(name).or_else(|| {
            if self.config.accept_short_names {
                K::from_short_name(name)
            } else {
                None
            }
        })
    }

    fn resolve<K: KeyTable>(&self, name: &str) -> Result<K> {
        self.find::<K>(name).ok_or_else(|| {
            log::debug!(
                "property '{}' is not defined in the {} table",
                name,
                self.version()
            );
            Error::NameNotFound {
                name: name.to_string(),
                version: self.version(),
            }
        })
    }
}
