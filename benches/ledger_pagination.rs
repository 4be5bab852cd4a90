//! Ledger pagination benchmarks
//!
//! Measures end-to-end render time as the criminal-history ledger grows.

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use warrant_press::{
    ArrestEntry, CriminalRecord, WarrantKind, WarrantPress, WarrantRecord, WarrantStatus,
};

fn warrant_with_ledger(entries: usize) -> WarrantRecord {
    let filed = Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap();
    let decided = Utc.with_ymd_and_hms(2026, 10, 2, 16, 0, 0).unwrap();
    let rows = (0..entries)
        .map(|i| {
            ArrestEntry::new(
                format!("2025-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                "Possession of a controlled substance with intent to distribute, \
                 resisting arrest and evading a peace officer",
            )
        })
        .collect();

    WarrantRecord::new("bench-0001", WarrantKind::Arrest, filed, "Sgt. Vega", "Trevor Philips")
        .with_narrative("Benchmark", "Ledger pagination benchmark record.")
        .with_status(WarrantStatus::Approved, decided)
        .with_judge("Judge Hale")
        .with_criminal_record(CriminalRecord::new("Trevor Philips", "BC-11408").with_entries(rows))
}

fn benchmark_ledger_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_pagination");
    let press = WarrantPress::default();

    for entries in [0, 10, 100, 1000] {
        let record = warrant_with_ledger(entries);
        group.throughput(Throughput::Elements(entries as u64));
        group.bench_with_input(BenchmarkId::new("entries", entries), &record, |b, record| {
            b.iter(|| press.render(black_box(record)).expect("Failed to render warrant"));
        });
    }

    group.finish();
}

fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_render");
    let press = WarrantPress::default();

    for count in [1, 8, 32] {
        let records: Vec<_> = (0..count).map(|_| warrant_with_ledger(50)).collect();
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            b.iter(|| press.render_batch(black_box(records)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_ledger_length, benchmark_batch);
criterion_main!(benches);
