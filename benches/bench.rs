//! Criterion benchmarks for the typogly scrambling pipeline.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use typogly::analysis::token_filter::scramble::scramble_word;
use typogly::scrambler::Scrambler;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate a paragraph of repeated sample text.
fn generate_text(lines: usize) -> String {
    let line = "The quick brown fox jumps over the lazy dog while (somehow) reading scrambled words";
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(line);
        if i + 1 < lines {
            text.push('\n');
        }
    }
    text
}

fn bench_scramble_word(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("scramble_word", |b| {
        b.iter(|| scramble_word(black_box("(typoglycemia),"), &mut rng))
    });
}

fn bench_process_line(c: &mut Criterion) {
    let scrambler = Scrambler::with_seed(42);
    let line = generate_text(1);

    let mut group = c.benchmark_group("process_line");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("single_line", |b| {
        b.iter(|| scrambler.process_line(black_box(&line)).unwrap())
    });
    group.finish();
}

fn bench_process_text(c: &mut Criterion) {
    let scrambler = Scrambler::with_seed(42);
    let text = generate_text(100);

    let mut group = c.benchmark_group("process_text");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("100_lines", |b| {
        b.iter(|| scrambler.process_text(black_box(&text)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scramble_word,
    bench_process_line,
    bench_process_text
);
criterion_main!(benches);
