//! Fixed-alphabet LZW throughput benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzgamma_lzw::{compress, decompress};
use std::hint::black_box;

/// English-like text within the alphabet
fn text_like(size: usize) -> String {
    let text = "The quick brown fox jumps over the lazy dog. \
                Pack my box with five dozen liquor jugs. \
                How vexingly quick daft zebras jump! ";
    text.chars().cycle().take(size).collect()
}

fn bench_lzw(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw");

    for size in [4 * 1024, 64 * 1024] {
        let text = text_like(size);
        let codes = compress(&text).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("compress", size), &text, |b, text| {
            b.iter(|| black_box(compress(black_box(text)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("decompress", size), &codes, |b, codes| {
            b.iter(|| black_box(decompress(black_box(codes)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lzw);
criterion_main!(benches);
