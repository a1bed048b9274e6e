//! Benchmarks for the pagination core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use invoice_pager::{
    paginate_by_heights, paginate_by_heights_with_extras, paginate_fixed, paginate_items, Extras,
    LineItem, Pager, PagerConfig,
};

fn sample_items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::with_amounts(
                format!(
                    "Line item {} covering services rendered during the current billing period",
                    i
                ),
                (i % 7 + 1) as f64,
                120.0,
            )
        })
        .collect()
}

fn bench_uniform_packing(c: &mut Criterion) {
    c.bench_function("paginate_1000_uniform_rows", |b| {
        let heights = vec![40.0f32; 1000];

        b.iter(|| {
            black_box(paginate_by_heights(black_box(&heights), 900.0));
        });
    });
}

fn bench_varied_packing_with_extras(c: &mut Criterion) {
    c.bench_function("paginate_1000_varied_rows_with_extras", |b| {
        let heights: Vec<f32> = (0..1000).map(|i| 28.0 + (i % 5) as f32 * 16.0).collect();
        let config = PagerConfig::default();
        let extras = Extras::new(220.0, 260.0);

        b.iter(|| {
            black_box(paginate_by_heights_with_extras(
                black_box(&heights),
                &config,
                extras,
            ));
        });
    });
}

fn bench_estimated_packing(c: &mut Criterion) {
    c.bench_function("paginate_1000_estimated_items", |b| {
        let items = sample_items(1000);
        let config = PagerConfig::default();

        b.iter(|| {
            black_box(paginate_items(black_box(&items), &config));
        });
    });
}

fn bench_fixed_chunking(c: &mut Criterion) {
    c.bench_function("paginate_fixed_10000_rows", |b| {
        b.iter(|| {
            black_box(paginate_fixed(black_box(10_000), 12));
        });
    });
}

fn bench_pager_update_cycle(c: &mut Criterion) {
    c.bench_function("pager_update_cycle", |b| {
        let mut pager = Pager::with_items(sample_items(500), PagerConfig::default());

        b.iter(|| {
            pager.set_items(sample_items(500));
            pager.update();
            black_box(pager.page_count());
        });
    });
}

criterion_group!(
    benches,
    bench_uniform_packing,
    bench_varied_packing_with_extras,
    bench_estimated_packing,
    bench_fixed_chunking,
    bench_pager_update_cycle,
);

criterion_main!(benches);
