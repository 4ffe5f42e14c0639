use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

use panel_ledger::panel::LDSP_HEADERS;
use panel_ledger::{
    save_batch, Cell, EdgingMap, LedgerConfig, ObjectKind, SceneObject, Table, TableStore,
    XlsxStore,
};

fn selection(n: usize) -> Vec<SceneObject> {
    (0..n)
        .map(|i| SceneObject {
            name: format!("Cube.{:03}", i),
            kind: ObjectKind::Mesh,
            dimensions: [0.72, 0.56, 0.016],
            location: [i as f64, 0.0, 0.0],
        })
        .collect()
}

fn bench_table_upsert(c: &mut Criterion) {
    let mut table = Table::with_headers(&LDSP_HEADERS);
    for i in 0..100 {
        table.upsert(vec![Cell::from(format!("Cube.{:03}", i)), Cell::Int(i)]);
    }

    c.bench_function("table_upsert_update_100", |b| {
        let mut i = 0i64;
        b.iter(|| {
            let name = format!("Cube.{:03}", i % 100);
            table.upsert(black_box(vec![Cell::from(name), Cell::Int(i)]));
            i += 1;
        });
    });
}

fn bench_save_batch(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let config = LedgerConfig::for_project(tmp.path().join("bench.blend"));
    let objects = selection(50);
    let edging = EdgingMap::new();
    let store = XlsxStore::new();

    c.bench_function("save_batch_50", |b| {
        b.iter(|| {
            save_batch(&config, black_box(&objects), &edging, &store).unwrap();
        });
    });
}

fn bench_xlsx_reload(c: &mut Criterion) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bench_ldsp.xlsx");
    let store = XlsxStore::new();

    let mut table = Table::with_headers(&LDSP_HEADERS);
    for i in 0..100 {
        table.upsert(vec![Cell::from(format!("Cube.{:03}", i)), Cell::Int(i)]);
    }
    store.persist(&table, &path).unwrap();

    c.bench_function("xlsx_open_100", |b| {
        b.iter(|| {
            let back = store.open_or_create(black_box(&path), &LDSP_HEADERS).unwrap();
            assert_eq!(back.len(), 100);
        });
    });
}

criterion_group!(benches, bench_table_upsert, bench_save_batch, bench_xlsx_reload);
criterion_main!(benches);
