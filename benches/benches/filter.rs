// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pulse_dataset::{Dataset, DatasetBuilder, Entity, FilterCriteria, compute_visible};

const CATEGORIES: [&str; 4] = ["Office", "Hotel", "Retail", "Multifamily Housing"];
const REGIONS: [&str; 5] = ["BRONX", "BROOKLYN", "MANHATTAN", "QUEENS", "STATEN IS"];

fn synthetic(len: usize) -> Dataset {
    let mut builder = DatasetBuilder::new();
    for i in 0..len {
        let f = i as f64;
        builder.push(Entity {
            name: format!("Building {i}"),
            category: CATEGORIES[i % CATEGORIES.len()].to_owned(),
            region: Some(REGIONS[i % REGIONS.len()].to_owned()),
            year: 2018 + (i % 6) as i32,
            metric_color: Some((f * 7.3) % 300.0),
            metric_size: Some((f * 13.1) % 2000.0),
            lat: 40.5 + (f * 0.618).fract() * 0.4,
            lon: -74.2 + (f * 0.414).fract() * 0.5,
        });
    }
    builder.finish()
}

fn bench_compute_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/compute_visible");

    // Hypothesis: filtering is a linear scan dominated by string compares, so
    // the all-wildcard case should be the cheapest per element.
    for len in [1_000usize, 10_000, 100_000] {
        let dataset = synthetic(len);
        group.throughput(Throughput::Elements(len as u64));

        let year_only = FilterCriteria::year(2022);
        group.bench_with_input(BenchmarkId::new("year_only", len), &dataset, |b, ds| {
            b.iter(|| black_box(compute_visible(ds, &year_only)));
        });

        let constrained = FilterCriteria {
            region: Some("MANHATTAN".to_owned()),
            category: Some("Office".to_owned()),
            year: 2022,
        };
        group.bench_with_input(BenchmarkId::new("region_category", len), &dataset, |b, ds| {
            b.iter(|| black_box(compute_visible(ds, &constrained)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compute_visible);
criterion_main!(benches);
