//! Benchmarks for markdown parsing throughput.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mdp_engine::MarkdownEngine;

/// Generate a document mixing every construct the engine handles.
fn generate_markdown(sections: usize) -> String {
    let mut md = String::with_capacity(sections * 400);
    md.push_str("# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        md.push_str(&format!(
            "Paragraph {i} with **bold**, *italic*, `code` and a [link](https://example.com/{i}).\n\n"
        ));
        md.push_str("- first\n- second\n1. third\n\n");
        md.push_str("> quoted line\n> another\n\n");
        md.push_str("| Name | Value |\n|---|---|\n| a | 1 |\n\n");
        md.push_str("```rust\nfn main() { let x = 1 < 2; }\n```\n\n");
    }
    md
}

fn bench_parse_simple(c: &mut Criterion) {
    let engine = MarkdownEngine::new();

    c.bench_function("parse_simple_markdown", |b| {
        b.iter(|| engine.parse("# Hello\n\nSimple content."));
    });
}

fn bench_parse_varying_sizes(c: &mut Criterion) {
    let engine = MarkdownEngine::new();
    let mut group = c.benchmark_group("parse_by_sections");

    for sections in [10, 100, 1000] {
        let markdown = generate_markdown(sections);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &markdown, |b, md| {
            b.iter(|| engine.parse(md));
        });
    }

    group.finish();
}

fn bench_count_words(c: &mut Criterion) {
    let engine = MarkdownEngine::new();
    let markdown = generate_markdown(100);

    c.bench_function("count_words_100_sections", |b| {
        b.iter(|| engine.count_words(&markdown));
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_varying_sizes,
    bench_count_words
);
criterion_main!(benches);
