use bucket_hashmap::BucketHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("bucket_map_insert_10k", |b| {
        let keys: Vec<_> = lcg(1).take(10_000).map(key).collect();
        b.iter_batched(
            || BucketHashMap::with_slots(4096),
            |mut m| {
                for k in &keys {
                    m.insert(k, "v");
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit(c: &mut Criterion) {
    c.bench_function("bucket_map_find_hit", |b| {
        let mut m = BucketHashMap::with_slots(4096);
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, &i.to_string());
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.find(k));
        })
    });
}

fn bench_find_miss(c: &mut Criterion) {
    c.bench_function("bucket_map_find_miss", |b| {
        let mut m = BucketHashMap::with_slots(4096);
        for (i, x) in lcg(11).take(10_000).enumerate() {
            m.insert(&key(x), &i.to_string());
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in map
            let k = key(miss.next().unwrap());
            black_box(m.find(&k));
        })
    });
}

fn bench_erase_insert_churn(c: &mut Criterion) {
    c.bench_function("bucket_map_erase_insert_churn", |b| {
        let mut m = BucketHashMap::with_slots(1024);
        let keys: Vec<_> = lcg(13).take(8_192).map(key).collect();
        for k in &keys {
            m.insert(k, "v");
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            m.erase(k);
            m.insert(k, "v");
        })
    });
}

// The slot count is fixed, so a crowded table degrades to linear bucket
// scans; keep that cost visible next to the well-provisioned cases.
fn bench_find_hit_scarce_slots(c: &mut Criterion) {
    c.bench_function("bucket_map_find_hit_16_slots", |b| {
        let mut m = BucketHashMap::new();
        let keys: Vec<_> = lcg(17).take(2_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k, &i.to_string());
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.find(k));
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_find_hit, bench_find_miss, bench_erase_insert_churn, bench_find_hit_scarce_slots
}
criterion_main!(benches);
