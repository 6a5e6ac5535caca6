use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multihash::{decode, sum, Registry, BLAKE2B_MIN, BLAKE3, SHA2_256};

fn benchmark_sum(c: &mut Criterion) {
    let registry = Registry::all();
    let data = vec![0xabu8; 1024];

    c.bench_function("sum_sha2_256_1kib", |b| {
        b.iter(|| sum(&registry, black_box(&data), SHA2_256, None).unwrap())
    });
    c.bench_function("sum_blake2b_256_1kib", |b| {
        b.iter(|| sum(&registry, black_box(&data), BLAKE2B_MIN + 31, None).unwrap())
    });
    c.bench_function("sum_blake3_1kib", |b| {
        b.iter(|| sum(&registry, black_box(&data), BLAKE3, None).unwrap())
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let registry = Registry::all();
    let hash = sum(&registry, b"foo", SHA2_256, None).unwrap();
    let buf = hash.as_bytes().to_vec();

    c.bench_function("decode_sha2_256", |b| {
        b.iter(|| decode(black_box(&buf)).unwrap())
    });
}

criterion_group!(benches, benchmark_sum, benchmark_decode);
criterion_main!(benches);
