use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use radixpass::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_single_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("Single Pass");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 100_000;
    let keys: Vec<u32> = (0..count).map(|_| rng.random()).collect();
    let ids: Vec<u32> = (0..count as u32).collect();
    group.throughput(Throughput::Elements(count as u64));

    for bits in [4, 8] {
        let params = RadixParams::from_digit_bits(bits, 0).unwrap();
        group.bench_function(format!("counting_pass ({bits}-bit digit)"), |b| {
            let mut out_keys = vec![0u32; count];
            let mut out_ids = vec![0u32; count];
            b.iter(|| {
                counting_pass(
                    black_box(keys.as_slice()),
                    black_box(ids.as_slice()),
                    &mut out_keys,
                    &mut out_ids,
                    count,
                    &params,
                )
            })
        });
    }

    // Std Sort (Stable) on the same digit
    let params = RadixParams::default();
    let pairs: Vec<(u32, u32)> = keys.iter().copied().zip(ids.iter().copied()).collect();
    group.bench_function("slice::sort_by_key (stable)", |b| {
        b.iter_batched(
            || pairs.clone(),
            |mut data| data.sort_by_key(|&(key, _)| params.digit(key)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_skewed_digits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Skewed Digits");
    group.sample_size(10);

    // Nearly every key lands in the same bucket.
    let mut rng = rand::rng();
    let count = 100_000;
    let keys: Vec<u32> = (0..count)
        .map(|_| {
            if rng.random_ratio(1, 100) {
                rng.random()
            } else {
                0x0000_0042
            }
        })
        .collect();
    let ids: Vec<u32> = (0..count as u32).collect();
    let params = RadixParams::default();

    group.bench_function("counting_pass", |b| {
        let mut out_keys = vec![0u32; count];
        let mut out_ids = vec![0u32; count];
        b.iter(|| {
            counting_pass(
                black_box(keys.as_slice()),
                black_box(ids.as_slice()),
                &mut out_keys,
                &mut out_ids,
                count,
                &params,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_single_pass, bench_skewed_digits);
criterion_main!(benches);
