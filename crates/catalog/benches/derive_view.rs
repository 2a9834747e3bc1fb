use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use greennest_catalog::{CatalogItem, SortKey, ViewCriteria, derive, top_rated};

fn synthetic_catalog(size: usize) -> Vec<CatalogItem> {
    let categories = ["Indoor", "Outdoor", "Succulent", "Herb"];
    (0..size)
        .map(|i| {
            CatalogItem::new(
                i as i64,
                format!("Plant {i:05}"),
                categories[i % categories.len()],
            )
            .with_rating((i % 50) as f64 / 10.0)
            .with_description(format!("low-maintenance specimen number {i}"))
        })
        .collect()
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    for size in [100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filter_sort", size), &catalog, |b, catalog| {
            let criteria = ViewCriteria::all()
                .with_category("Indoor")
                .with_sort(SortKey::NameAscending);
            b.iter(|| derive(black_box(catalog), black_box(&criteria)));
        });

        group.bench_with_input(BenchmarkId::new("search", size), &catalog, |b, catalog| {
            let criteria = ViewCriteria::all().with_search("specimen number 42");
            b.iter(|| derive(black_box(catalog), black_box(&criteria)));
        });

        group.bench_with_input(BenchmarkId::new("top_rated_3", size), &catalog, |b, catalog| {
            b.iter(|| top_rated(black_box(catalog), 3));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive);
criterion_main!(benches);
