//! Benchmarks for NestKV store operations

use criterion::{criterion_group, criterion_main, Criterion};
use nestkv::session::SessionId;
use nestkv::store::Store;

fn store_benchmarks(c: &mut Criterion) {
    c.bench_function("autocommit_put", |b| {
        let store = Store::new();
        let s = SessionId::next();
        let mut i = 0u64;
        b.iter(|| {
            store.put(s, format!("key-{}", i % 1000), "value".to_string());
            i += 1;
        });
    });

    c.bench_function("get_committed", |b| {
        let store = Store::new();
        let s = SessionId::next();
        for i in 0..1000 {
            store.put(s, format!("key-{i}"), format!("value-{i}"));
        }
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("key-{}", i % 1000);
            i += 1;
            store.get(s, &key)
        });
    });

    c.bench_function("get_through_deep_stack", |b| {
        let store = Store::new();
        let s = SessionId::next();
        store.put(s, "base".to_string(), "value".to_string());
        for _ in 0..32 {
            store.start(s);
        }
        b.iter(|| store.get(s, "base"));
    });

    c.bench_function("start_put_commit", |b| {
        let store = Store::new();
        let s = SessionId::next();
        b.iter(|| {
            store.start(s);
            store.put(s, "key".to_string(), "value".to_string());
            store.commit(s).unwrap();
        });
    });

    c.bench_function("start_put_rollback", |b| {
        let store = Store::new();
        let s = SessionId::next();
        b.iter(|| {
            store.start(s);
            store.put(s, "key".to_string(), "value".to_string());
            store.rollback(s).unwrap();
        });
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
