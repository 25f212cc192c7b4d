use criterion::{Criterion, criterion_group, criterion_main};
use journal_tags_engine::encoding::serialize_blocks;
use journal_tags_engine::parsing::parse_document;
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_tag_document(100);
    group.bench_function("parse_document", |b| {
        b.iter(|| {
            let blocks = parse_document(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    let unterminated = common::generate_unterminated_tags(100);
    group.bench_function("parse_unterminated", |b| {
        b.iter(|| {
            let blocks = parse_document(std::hint::black_box(&unterminated));
            std::hint::black_box(blocks);
        });
    });

    let blocks = parse_document(&content);
    group.bench_function("serialize_blocks", |b| {
        b.iter(|| {
            let text = serialize_blocks(std::hint::black_box(&blocks));
            std::hint::black_box(text);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
