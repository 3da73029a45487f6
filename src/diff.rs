//! Comparison of table versions and explicit code translation between them.
//!
//! Two versions share most names but not their codes, so a code is never valid across
//! versions as is. [`translate`] moves a code through its name and refuses when the key does
//! not exist on both sides.

use serde::Serialize;

use crate::{config::TableConfig, table::PropertyKeyTable, tables::Entry, Result, TableVersion};

/// A key present in both versions under different codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Renumbered {
    /// Full key name
    pub name: &'static str,
    /// Code in the source version
    pub from: u16,
    /// Code in the target version
    pub to: u16,
}

/// Differences between two table versions, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDiff {
    /// Source version
    pub from: TableVersion,
    /// Target version
    pub to: TableVersion,
    /// Keys only in the target version, ascending by target code
    pub added: Vec<Entry>,
    /// Keys only in the source version, ascending by source code
    pub removed: Vec<Entry>,
    /// Keys in both versions whose code changed, ascending by source code
    pub renumbered: Vec<Renumbered>,
}

impl TableDiff {
    /// Returns true if both versions assign the same codes to the same names.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.renumbered.is_empty()
    }
}

fn exact_table(version: TableVersion) -> PropertyKeyTable {
    PropertyKeyTable::with_config(TableConfig::new(version))
}

/// Compare `from` against `to`.
#[must_use]
pub fn diff(from: TableVersion, to: TableVersion) -> TableDiff {
    let source = exact_table(from);
    let target = exact_table(to);

    let mut removed = Vec::new();
    let mut renumbered = Vec::new();
    for entry in source.entries() {
        match target.code_of(entry.name) {
            Ok(code) if code != entry.code => renumbered.push(Renumbered {
                name: entry.name,
                from: entry.code,
                to: code,
            }),
            Ok(_) => {}
            Err(_) => removed.push(entry),
        }
    }

    let added = target
        .entries()
        .into_iter()
        .filter(|entry| !source.contains_name(entry.name))
        .collect();

    TableDiff {
        from,
        to,
        added,
        removed,
        renumbered,
    }
}

/// Translate `code` from version `from` to version `to` through the key's name.
///
/// # Errors
/// Returns [`crate::Error::CodeNotFound`] if `from` does not define `code`, and
/// [`crate::Error::NameNotFound`] if the key does not exist in `to`.
///
/// ```rust
/// use propkeys::{diff::translate, TableVersion};
///
/// // kPropertyWidth
/// assert_eq!(translate(168, TableVersion::Legacy, TableVersion::Current)?, 175);
/// // kPropertyParameters has no legacy code
/// assert!(translate(129, TableVersion::Current, TableVersion::Legacy).is_err());
/// # Ok::<(), propkeys::Error>(())
/// ```
pub fn translate(code: u16, from: TableVersion, to: TableVersion) -> Result<u16> {
    let name = exact_table(from).name_of(code)?;
    exact_table(to).code_of(name)
}
