//! Benchmarks for selection injection.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textile_toolbar::affix::AffixCatalog;
use textile_toolbar::editor::{SelectionState, inject};

fn bench_inject_single_line(c: &mut Criterion) {
    let catalog = AffixCatalog::builtin();
    let bold = catalog.get("bold").unwrap();
    let state = SelectionState::new("Hello world", 6, 11);
    c.bench_function("inject_single_line", |b| {
        b.iter(|| inject(black_box(&state), black_box(bold)))
    });
}

fn bench_inject_many_lines(c: &mut Criterion) {
    let catalog = AffixCatalog::builtin();
    let list = catalog.get("list-ul").unwrap();
    let text = (1..=500).map(|i| format!("item {i}")).collect::<Vec<_>>().join("\n");
    let len = text.chars().count();
    let state = SelectionState::new(text, 0, len);
    c.bench_function("inject_many_lines", |b| {
        b.iter(|| inject(black_box(&state), black_box(list)))
    });
}

criterion_group!(benches, bench_inject_single_line, bench_inject_many_lines);
criterion_main!(benches);
