use criterion::{Criterion, criterion_group, criterion_main};
use sitemark_engine::{build_document, markdown_to_html, split_blocks};

fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and `code`.\n\n- Bullet point with a [link](https://example.com)\n- Another item\n\n1. first\n2. second\n\n> A quote with ![an image](img.png)\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(20);

    let content = generate_markdown_content(100);

    group.bench_function("split_blocks", |b| {
        b.iter(|| split_blocks(std::hint::black_box(&content)));
    });
    group.bench_function("build_document", |b| {
        b.iter(|| build_document(std::hint::black_box(&content)));
    });
    group.bench_function("markdown_to_html", |b| {
        b.iter(|| markdown_to_html(std::hint::black_box(&content)));
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
