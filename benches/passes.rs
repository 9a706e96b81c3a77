use criterion::{Criterion, criterion_group, criterion_main};
use letter_stats::{double_letter_stats, single_letter_stats};
use letter_stats_infra::MemoryStream;
use std::hint::black_box;

fn sample_text() -> String {
    "Съешь же ещё этих мягких французских булок, да выпей чаю. \
     The quick brown fox jumps over the lazy dog; bookkeeper, coffee, Mississippi. "
        .repeat(200)
}

fn benchmark_passes(c: &mut Criterion) {
    let mut stream = MemoryStream::new(sample_text());

    c.bench_function("single_letter_stats", |b| {
        b.iter(|| black_box(single_letter_stats(&mut stream).unwrap()));
    });

    c.bench_function("double_letter_stats", |b| {
        b.iter(|| black_box(double_letter_stats(&mut stream).unwrap()));
    });
}

criterion_group!(benches, benchmark_passes);
criterion_main!(benches);
