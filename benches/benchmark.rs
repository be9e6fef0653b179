use criterion::{Criterion, criterion_group, criterion_main};
use fuzzy_locate::{CompiledPattern, FuzzyMatcherBuilder};
use std::hint::black_box;

fn benchmark_locate(c: &mut Criterion) {
    let matcher = FuzzyMatcherBuilder::new()
        .threshold(0.5)
        .distance(1000)
        .build();
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vestibulum eros ipsum, tincidutn eu metus ut, commodo accumsan mi. Vestibulum porta, orci nec ullamcorper posuere, eros tortor pharetra est, at porttitor mi leo a velit.".repeat(8);
    let compiled = CompiledPattern::new("tincidunt", false);

    c.bench_function("locate", |b| {
        b.iter(|| {
            let _ = matcher.locate(black_box(&text), "tincidunt", black_box(600));
        });
    });
    c.bench_function("locate_compiled", |b| {
        b.iter(|| {
            let _ = matcher.locate_compiled(black_box(&text), &compiled, black_box(600));
        });
    });
}

criterion_group!(benches, benchmark_locate);
criterion_main!(benches);
