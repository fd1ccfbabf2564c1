use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use arith_lexer::Lexer;

/// Build a long, deeply parenthesized expression line.
fn generate_large_expression() -> String {
    let mut content = String::new();
    for i in 0..10_000 {
        content.push_str(&format!("({} + {}) * {} - ", i, i % 97, i % 13));
    }
    content.push('1');
    content.push('\n');
    content
}

fn bench_lexer(c: &mut Criterion) {
    let source = generate_large_expression();

    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("scan_large_expression", |b| {
        b.iter(|| {
            let count = Lexer::new(&source).count();
            assert!(count > 0);
            count
        })
    });
    group.finish();
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
