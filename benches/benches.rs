use std::collections::HashMap;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BatchSize;
use criterion::Criterion;
use longmap::ChainedLongMap;
use longmap::LongMap;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

fn put_benchmark(c: &mut Criterion) {
    c.bench_function("longmap_put", |b| {
        b.iter_batched(
            ChainedLongMap::new,
            |mut map| {
                let mut rng = SmallRng::from_seed([0; 32]);
                for _ in 0..1000 {
                    let key = rng.gen_range(0..100000);
                    map.put(key, format!("value{}", key));
                }
            },
            BatchSize::SmallInput,
        );
    });
    c.bench_function("hash_map_put", |b| {
        b.iter_batched(
            HashMap::new,
            |mut map| {
                let mut rng = SmallRng::from_seed([0; 32]);
                for _ in 0..1000 {
                    let key: i64 = rng.gen_range(0..100000);
                    map.insert(key, format!("value{}", key));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn get_benchmark(c: &mut Criterion) {
    // Small and large fills show the cost of the fixed bucket table.
    for size in [100, 10000] {
        c.bench_function(&format!("longmap_get_{}", size), |b| {
            let mut map = ChainedLongMap::with_capacity(1000);
            for key in 0..size {
                map.put(key, format!("value{}", key));
            }
            let mut rng = SmallRng::from_seed([0; 32]);
            b.iter(|| {
                map.get(rng.gen_range(0..size));
            });
        });
        c.bench_function(&format!("hash_map_get_{}", size), |b| {
            let mut map = HashMap::new();
            for key in 0..size {
                map.insert(key, format!("value{}", key));
            }
            let mut rng = SmallRng::from_seed([0; 32]);
            b.iter(|| {
                map.get(&rng.gen_range(0..size));
            });
        });
    }
}

fn contains_value_benchmark(c: &mut Criterion) {
    c.bench_function("longmap_contains_value", |b| {
        let mut map = ChainedLongMap::new();
        for key in 0..1000 {
            map.put(key, key as u32);
        }
        let mut rng = SmallRng::from_seed([0; 32]);
        b.iter(|| {
            map.contains_value(&rng.gen_range(0..2000));
        });
    });
}

criterion_group!(benches, put_benchmark, get_benchmark, contains_value_benchmark);
criterion_main!(benches);
