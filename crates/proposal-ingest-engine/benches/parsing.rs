use criterion::{Criterion, criterion_group, criterion_main};
use proposal_ingest_engine::{
    TextStyle, parse_inline_bold, parse_mixed_content, parse_mixed_to_sections,
    parse_smart_table, render_rich_text,
};
mod common;

fn bench_text_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    group.sample_size(10);

    let paste = common::generate_paste(100);
    group.bench_function("mixed_content", |b| {
        b.iter(|| std::hint::black_box(parse_mixed_content(std::hint::black_box(&paste))));
    });

    let table = common::generate_csv_table(500);
    group.bench_function("smart_table", |b| {
        b.iter(|| std::hint::black_box(parse_smart_table(std::hint::black_box(&table))));
    });

    group.bench_function("inline_bold", |b| {
        b.iter(|| std::hint::black_box(parse_inline_bold(std::hint::black_box(&paste))));
    });

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("html");
    group.sample_size(10);

    let html = common::generate_editor_html(100);
    let base = TextStyle::default();
    group.bench_function("rich_text", |b| {
        b.iter(|| std::hint::black_box(render_rich_text(std::hint::black_box(&html), &base)));
    });
    group.bench_function("sections", |b| {
        b.iter(|| std::hint::black_box(parse_mixed_to_sections(std::hint::black_box(&html))));
    });

    group.finish();
}

criterion_group!(benches, bench_text_parsers, bench_html);
criterion_main!(benches);
