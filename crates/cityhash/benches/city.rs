use core::hint::black_box;

use cityhash::{U128, hash32, hash64, hash64_with_seeds, hash128, hash128_with_seed};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

mod common;

fn city(c: &mut Criterion) {
  let inputs = common::sized_inputs();
  let mut group = c.benchmark_group("cityhash");
  let seed = U128::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);

  for (len, data) in &inputs {
    common::set_throughput(&mut group, *len);

    group.bench_with_input(BenchmarkId::new("hash32", len), data, |b, d| b.iter(|| black_box(hash32(black_box(d)))));
    group.bench_with_input(BenchmarkId::new("hash64", len), data, |b, d| b.iter(|| black_box(hash64(black_box(d)))));
    group.bench_with_input(BenchmarkId::new("hash64_with_seeds", len), data, |b, d| {
      b.iter(|| black_box(hash64_with_seeds(black_box(d), seed.low, seed.high)))
    });
    group.bench_with_input(BenchmarkId::new("hash128", len), data, |b, d| b.iter(|| black_box(hash128(black_box(d)))));
    group.bench_with_input(BenchmarkId::new("hash128_with_seed", len), data, |b, d| {
      b.iter(|| black_box(hash128_with_seed(black_box(d), seed)))
    });
  }

  group.finish();
}

criterion_group!(benches, city);
criterion_main!(benches);
