use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use termpad::syntax::{Highlighter, Language};
use termpad::term::Size;
use termpad::{TextArea, TextAreaConfig};

const RUST_LINE: &str = r#"    let value = compute("input", 42); // Result<Value, Error>"#;

fn sample_lines(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{RUST_LINE} {i}")).collect()
}

fn frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    let size = Size { rows: 50, cols: 120 };

    for (name, language) in [("plain", Language::PlainText), ("rust", Language::Rust)] {
        let config = TextAreaConfig::new("bench")
            .line_numbers(true)
            .language(language);
        let mut area = TextArea::with_lines(config, sample_lines(1000));
        group.bench_function(name, |b| b.iter(|| black_box(area.render(black_box(size)))));
    }

    group.finish();
}

fn highlighting(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight");
    group.throughput(Throughput::Bytes(RUST_LINE.len() as u64));

    group.bench_function("rust_line", |b| {
        b.iter(|| black_box(Language::Rust.highlight(black_box(RUST_LINE))))
    });
    group.bench_function("markdown_line", |b| {
        b.iter(|| {
            black_box(Language::Markdown.highlight(black_box("- **bold** and `code` [link](url)")))
        })
    });

    group.finish();
}

criterion_group!(benches, frames, highlighting);
criterion_main!(benches);
