use blockwise_engine::{Position, Selection, classify, expand, locate};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.sample_size(10);

    let lines = common::generate_markdown_lines(100);
    group.bench_function("every_line", |b| {
        b.iter(|| {
            for line in &lines {
                std::hint::black_box(classify(std::hint::black_box(line)));
            }
        });
    });

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    group.sample_size(10);

    let lines = common::generate_markdown_lines(100);
    let carets: Vec<Selection> = (0..lines.len())
        .map(|i| Selection::caret(Position::new(i, 1)))
        .collect();
    group.bench_function("caret_per_line", |b| {
        b.iter(|| std::hint::black_box(expand(&lines, std::hint::black_box(&carets), true)));
    });

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    group.sample_size(10);

    // Last code line of the last block: the scan covers the whole document
    let lines = common::generate_markdown_lines(100);
    let cursor = Position::new(lines.len() - 4, 0);
    group.bench_function("end_of_document", |b| {
        b.iter(|| std::hint::black_box(locate(&lines, std::hint::black_box(cursor), "")));
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_expand, bench_locate);
criterion_main!(benches);
