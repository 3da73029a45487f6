#![allow(unused)]
extern crate propkeys;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use propkeys::{
    keyset::PropertyKeySet,
    tables::{current::PropertyKey, KeyTable},
    wire, PropertyKeyTable, TableVersion,
};
use std::hint::black_box;

/// Benchmark name and code lookups over every entry of the current table
///
/// Compares the typed enum lookups against the version-erased table, which dispatches on
/// the configured version for every call.
fn bench_lookups(c: &mut Criterion) {
    let table = PropertyKeyTable::new(TableVersion::Current);
    let entries = table.entries();

    let mut group = c.benchmark_group("lookup");
    group.throughput(Throughput::Elements(entries.len() as u64));
    group.bench_function("typed_from_name", |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(PropertyKey::from_name(black_box(entry.name)));
            }
        });
    });
    group.bench_function("erased_code_of", |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(table.code_of(black_box(entry.name)).ok());
            }
        });
    });
    group.bench_function("erased_name_of", |b| {
        b.iter(|| {
            for entry in &entries {
                black_box(table.name_of(black_box(entry.code)).ok());
            }
        });
    });
    group.finish();
}

/// Benchmark decoding a full dirty list from JSON
fn bench_wire(c: &mut Criterion) {
    let all = PropertyKeySet::<PropertyKey>::all();
    let keys: Vec<PropertyKey> = all.iter().collect();
    let json = wire::to_json(&keys).expect("Failed to encode keys");

    let mut group = c.benchmark_group("wire");
    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("from_json", |b| {
        b.iter(|| {
            let parsed: Vec<PropertyKey> = wire::from_json(black_box(&json)).unwrap();
            black_box(parsed)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_lookups, bench_wire);
criterion_main!(benches);
