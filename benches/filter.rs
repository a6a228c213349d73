// benches/filter.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use dex_view::config::options::{CategoryFilter, FilterCriteria};
use dex_view::dex::{Entry, LegendaryIndex, filter};

fn full_dex() -> Vec<Arc<Entry>> {
    (1..=493)
        .map(|id| {
            Arc::new(Entry {
                id,
                name: format!("entry-{id:03}"),
                types: vec!["normal".to_string()],
                sprite: None,
            })
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let loaded = full_dex();
    let index = LegendaryIndex::from_ids([144, 145, 146, 150, 151, 243, 244, 245, 249, 250]);

    c.bench_function("filter_identity", |b| {
        let criteria = FilterCriteria::default();
        b.iter(|| filter::apply(black_box(&loaded), &criteria, &index).len())
    });

    c.bench_function("filter_query", |b| {
        let criteria = FilterCriteria {
            query: "entry-1".to_string(),
            category: CategoryFilter::All,
        };
        b.iter(|| filter::apply(black_box(&loaded), &criteria, &index).len())
    });

    c.bench_function("filter_legendary", |b| {
        let criteria = FilterCriteria {
            query: String::new(),
            category: CategoryFilter::Legendary,
        };
        b.iter(|| filter::apply(black_box(&loaded), &criteria, &index).len())
    });

    c.bench_function("filter_combined", |b| {
        let criteria = FilterCriteria {
            query: "entry-2".to_string(),
            category: CategoryFilter::Legendary,
        };
        b.iter(|| filter::apply(black_box(&loaded), &criteria, &index).len())
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
