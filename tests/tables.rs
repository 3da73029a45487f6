//! Integration tests for the versioned property key tables.
//!
//! These exercise the public surface the way a binding layer would: a version chosen at
//! runtime, names and codes arriving as plain strings and integers, and dirty lists crossing
//! the boundary as JSON.

use std::collections::HashSet;

use propkeys::{
    diff::{diff, translate},
    keyset::PropertyKeySet,
    tables::{current, legacy, KeyTable},
    wire::{self, DirtyProperties},
    Error, PropertyKeyTable, TableConfig, TableVersion,
};

/// Every table version: round trip in both directions, distinct codes and names.
#[test]
fn tables_are_internally_consistent() {
    for version in TableVersion::all() {
        let table = PropertyKeyTable::new(version);
        let entries = table.entries();

        let codes: HashSet<u16> = entries.iter().map(|e| e.code).collect();
        let names: HashSet<&str> = entries.iter().map(|e| e.name).collect();
        assert_eq!(codes.len(), entries.len(), "{version}: duplicate code");
        assert_eq!(names.len(), entries.len(), "{version}: duplicate name");

        for entry in &entries {
            let code = table.code_of(entry.name).unwrap();
            assert_eq!(table.name_of(code).unwrap(), entry.name);
            let name = table.name_of(entry.code).unwrap();
            assert_eq!(table.code_of(name).unwrap(), entry.code);
        }
    }
}

#[test]
fn table_sizes() {
    let current = PropertyKeyTable::new(TableVersion::Current);
    assert_eq!(current.len(), 182);
    assert_eq!(current.entries().iter().map(|e| e.code).max(), Some(181));

    let legacy = PropertyKeyTable::new(TableVersion::Legacy);
    assert_eq!(legacy.len(), 175);
    assert_eq!(legacy.entries().iter().map(|e| e.code).max(), Some(174));
}

#[test]
fn versions_are_not_interchangeable() {
    let current = PropertyKeyTable::new(TableVersion::Current);
    let legacy = PropertyKeyTable::new(TableVersion::Legacy);

    // Same code, different key
    assert_eq!(current.name_of(2).unwrap(), "kPropertyAccessibilityActionsAssigned");
    assert_eq!(legacy.name_of(2).unwrap(), "kPropertyAccessibilityLabel");

    // Same key, different code
    assert_ne!(
        current.code_of("kPropertyWrap").unwrap(),
        legacy.code_of("kPropertyWrap").unwrap()
    );
}

#[test]
fn absent_name_is_not_found() {
    let legacy = PropertyKeyTable::new(TableVersion::Legacy);
    match legacy.code_of("kPropertyParameters") {
        Err(Error::NameNotFound { name, version }) => {
            assert_eq!(name, "kPropertyParameters");
            assert_eq!(version, TableVersion::Legacy);
        }
        other => panic!("expected NameNotFound, got {other:?}"),
    }

    assert!(matches!(
        legacy.code_of("kPropertyDoesNotExist"),
        Err(Error::NameNotFound { .. })
    ));
    assert!(matches!(
        PropertyKeyTable::new(TableVersion::Current).name_of(u16::MAX),
        Err(Error::CodeNotFound { .. })
    ));
}

#[test]
fn config_selects_version_and_policy() {
    let table = PropertyKeyTable::with_config(TableConfig::new(TableVersion::Legacy));
    assert_eq!(table.version(), TableVersion::Legacy);
    assert!(table.code_of("opacity").is_err());
    assert_eq!(table.code_of("kPropertyOpacity").unwrap(), 111);

    let table = PropertyKeyTable::with_config(TableConfig::relaxed(TableVersion::Legacy));
    assert_eq!(table.code_of("opacity").unwrap(), 111);
}

#[test]
fn default_table_matches_full_names_only() {
    let table = PropertyKeyTable::default();
    assert_eq!(table.version(), TableVersion::Current);
    assert!(matches!(
        table.code_of("opacity"),
        Err(Error::NameNotFound { ref name, version: TableVersion::Current }) if name == "opacity"
    ));
    assert!(!table.contains_name("wrap"));
    assert!("width".parse::<current::PropertyKey>().is_err());
    assert_eq!(table.code_of("kPropertyWrap").unwrap(), 181);
}

#[test]
fn typed_and_erased_lookups_agree() {
    let table = PropertyKeyTable::new(TableVersion::Current);
    for key in current::PropertyKey::entries() {
        assert_eq!(
            current::PropertyKey::from_code(key.code).map(KeyTable::name),
            Some(key.name)
        );
        assert_eq!(table.code_of(key.name).unwrap(), key.code);
    }
}

#[test]
fn dirty_set_crosses_boundary() {
    use legacy::PropertyKey as B;

    let mut dirty = PropertyKeySet::new();
    dirty.insert(B::Opacity);
    dirty.insert(B::Bounds);
    dirty.insert(B::NotifyChildrenChanged);

    let json = DirtyProperties::from_set(&dirty).to_json().unwrap();
    assert_eq!(json, r#"{"dirtyProperties":[21,86,111]}"#);

    let received = DirtyProperties::<B>::from_json(&json).unwrap();
    assert_eq!(received.to_set(), dirty);

    // The same payload read against the other version decodes to different keys
    let misread: Vec<current::PropertyKey> = wire::decode_payload(&json).unwrap();
    assert_ne!(
        misread.iter().map(|k| k.name()).collect::<Vec<_>>(),
        dirty.iter().map(|k| k.name()).collect::<Vec<_>>()
    );
}

#[test]
fn translation_between_versions() {
    let d = diff(TableVersion::Legacy, TableVersion::Current);
    assert_eq!(d.added.len(), 7);
    assert!(d.removed.is_empty());

    for renumbered in &d.renumbered {
        assert_eq!(
            translate(renumbered.from, TableVersion::Legacy, TableVersion::Current).unwrap(),
            renumbered.to
        );
    }

    for added in &d.added {
        assert!(translate(added.code, TableVersion::Current, TableVersion::Legacy).is_err());
    }
}
