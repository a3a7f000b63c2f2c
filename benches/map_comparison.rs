use core::hint::black_box;

use criterion::BatchSize;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use jump_hash::HashMap as JumpHashMap;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

const SIZES: &[usize] = &[1 << 10, 1 << 14, 1 << 18];

// Key 0 is the sentinel for the default comparator; start at 1.
fn keys(size: usize) -> Vec<u64> {
    (1..=size as u64).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("jump_hash/{size}"), |b| {
            b.iter_batched(
                || keys(size),
                |keys| {
                    let mut map: JumpHashMap<u64, u64> = JumpHashMap::new(0);
                    for key in keys {
                        map.map(key, key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || keys(size),
                |keys| {
                    let mut map = std::collections::HashMap::new();
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys(size),
                |keys| {
                    let mut map = hashbrown::HashMap::new();
                    for key in keys {
                        map.insert(key, key);
                    }
                    black_box(map.len())
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let mut rng = SmallRng::seed_from_u64(0x1234_5678);

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let mut probe_order = keys(size);
        probe_order.shuffle(&mut rng);

        let mut jump_map: JumpHashMap<u64, u64> = JumpHashMap::new(size);
        let mut std_map = std::collections::HashMap::with_capacity(size);
        let mut brown_map = hashbrown::HashMap::with_capacity(size);
        for key in keys(size) {
            jump_map.map(key, key);
            std_map.insert(key, key);
            brown_map.insert(key, key);
        }

        group.bench_function(format!("jump_hash/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &probe_order {
                    if jump_map.find(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &probe_order {
                    if std_map.get(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &probe_order {
                    if brown_map.get(key).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
