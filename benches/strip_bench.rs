//! Quote stripping benchmarks
//!
//! Measures classification plus truncation on a long reply chain.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailquote::strip::split_blocks;
use mailquote::QuoteStripper;

/// Build a thread of `depth` replies, each quoting everything before it
fn build_thread(depth: usize) -> String {
    let mut body = String::from("Initial message body.\nSecond line of the first mail.");
    for i in 0..depth {
        let quoted = body
            .lines()
            .map(|line| format!("> {}", line))
            .collect::<Vec<_>>()
            .join("\n");
        body = format!(
            "Reply number {}.\nShort answer here.\n\nOn Mon, Jan {}, 2025, Sender {} wrote:\n{}",
            i,
            i % 28 + 1,
            i,
            quoted
        );
    }
    body
}

fn benchmark_split_blocks(c: &mut Criterion) {
    let thread = build_thread(30);

    c.bench_function("split_blocks_30_replies", |b| {
        b.iter(|| split_blocks(black_box(&thread)).len());
    });
}

fn benchmark_strip(c: &mut Criterion) {
    let thread = build_thread(30);
    let stripper = QuoteStripper::new(10);

    c.bench_function("strip_30_replies", |b| {
        b.iter(|| stripper.strip(black_box(&thread), 0));
    });

    c.bench_function("strip_30_replies_capped", |b| {
        b.iter(|| stripper.strip(black_box(&thread), 2000));
    });
}

criterion_group!(benches, benchmark_split_blocks, benchmark_strip);
criterion_main!(benches);
