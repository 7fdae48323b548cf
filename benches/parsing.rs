//! Performance benchmarks for livemark
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use livemark::{Citation, Options, StreamRenderer};

/// Sample Markdown documents of various sizes
mod samples {
    pub const TINY: &str = "Hello, **world**!";

    pub const SMALL: &str = r#"# Heading

This is a paragraph with *emphasis* and **strong** text.

- Item 1
- Item 2
- Item 3

`inline code` in a paragraph.
"#;

    pub const MEDIUM: &str = r#"# Project Documentation

This document describes the **payments** service and its `POST /charges` endpoint.

## Authentication

1. Request a token
2. Send it as `Authorization: Bearer <token>`
3. Refresh before expiry

### Example

```rust
fn main() {
    let client = Client::new("key");
    println!("{:?}", client.charge(100));
}
```

> Tokens expire after *one hour*.

## Notes

- Idempotency keys are **required**
- Amounts are in cents
"#;

    /// Generate a large document by repeating sections
    pub fn large() -> String {
        MEDIUM.repeat(50)
    }

    /// Many unmatched emphasis openers on one line
    pub fn pathological_emphasis() -> String {
        "** a ".repeat(2000) + &"*b ".repeat(2000)
    }

    /// Long runs of empty backtick pairs
    pub fn pathological_backticks() -> String {
        "`` ".repeat(2000) + "`x`"
    }
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    for (name, input) in [
        ("tiny", samples::TINY),
        ("small", samples::SMALL),
        ("medium", samples::MEDIUM),
    ] {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(name, |b| b.iter(|| livemark::to_html(black_box(input))));
    }

    let large = samples::large();
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large", |b| b.iter(|| livemark::to_html(black_box(&large))));

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    let sources: Vec<Citation> = (0..200)
        .map(|i| {
            Citation::with_title(format!("Source {}", i % 50), format!("https://s{}.dev", i % 50))
        })
        .collect();
    group.bench_function("medium_with_sources", |b| {
        b.iter(|| livemark::compose(Some(black_box(samples::MEDIUM)), black_box(&sources)))
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");
    group.sample_size(20);

    // Full re-render per chunk: cost grows with the square of the chunk count.
    for chunk in [16usize, 64, 256] {
        let input = samples::MEDIUM;
        group.bench_with_input(BenchmarkId::new("medium", chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut stream = StreamRenderer::new(Options::default());
                for piece in input.as_bytes().chunks(chunk) {
                    // MEDIUM is ASCII, so byte chunks are valid str.
                    let piece = std::str::from_utf8(piece).unwrap_or_default();
                    black_box(stream.push(piece));
                }
                stream.finish(&[])
            })
        });
    }

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain = "Hello, this is plain code without any brackets. ".repeat(100);
    group.throughput(Throughput::Bytes(plain.len() as u64));
    group.bench_function("plain_code", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(plain.len());
            livemark::escape::escape_code_into(&mut out, black_box(&plain));
            out
        })
    });

    let generic_heavy = "fn f<T: Into<Vec<u8>>>(x: T) -> Box<dyn Fn()> {} ".repeat(100);
    group.throughput(Throughput::Bytes(generic_heavy.len() as u64));
    group.bench_function("generic_heavy_code", |b| {
        b.iter(|| {
            let mut out = String::with_capacity(generic_heavy.len() * 2);
            livemark::escape::escape_code_into(&mut out, black_box(&generic_heavy));
            out
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(20);

    let emphasis = samples::pathological_emphasis();
    group.throughput(Throughput::Bytes(emphasis.len() as u64));
    group.bench_function("unmatched_emphasis", |b| {
        b.iter(|| livemark::to_html(black_box(&emphasis)))
    });

    let backticks = samples::pathological_backticks();
    group.throughput(Throughput::Bytes(backticks.len() as u64));
    group.bench_function("backtick_runs", |b| {
        b.iter(|| livemark::to_html(black_box(&backticks)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rendering,
    bench_compose,
    bench_streaming,
    bench_escaping,
    bench_pathological
);
criterion_main!(benches);
