// Copyright 2025 the Energy Pulse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pulse_dataset::{Dataset, DatasetBuilder, Entity};
use pulse_imaging::RecordingBackend;
use pulse_scene::{Explorer, InputEvent, RenderStyle};

fn synthetic(len: usize) -> Dataset {
    let mut builder = DatasetBuilder::new();
    for i in 0..len {
        let f = i as f64;
        builder.push(Entity {
            name: String::new(),
            category: "Office".to_owned(),
            region: None,
            year: 2022,
            metric_color: Some((f * 7.3) % 300.0),
            metric_size: Some((f * 13.1) % 2000.0),
            lat: 40.5 + (f * 0.618).fract() * 0.4,
            lon: -74.2 + (f * 0.414).fract() * 0.5,
        });
    }
    builder.finish()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/render");
    let style = RenderStyle::default();

    for len in [1_000usize, 10_000, 50_000] {
        let mut explorer = Explorer::new(synthetic(len), Size::new(1200.0, 800.0));
        group.throughput(Throughput::Elements(len as u64));

        group.bench_function(BenchmarkId::new("identity", len), |b| {
            let mut backend = RecordingBackend::default();
            b.iter(|| {
                backend.clear_ops();
                black_box(explorer.render(&style, &mut backend));
            });
        });

        // Zoomed in: most markers are culled.
        for _ in 0..40 {
            explorer.on_event(InputEvent::Wheel {
                at: Point::new(600.0, 400.0),
                delta_y: -1.0,
            });
        }
        group.bench_function(BenchmarkId::new("zoomed", len), |b| {
            let mut backend = RecordingBackend::default();
            b.iter(|| {
                backend.clear_ops();
                black_box(explorer.render(&style, &mut backend));
            });
        });
    }

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame/hit_test");

    // First-match linear scan: a miss walks every marker, so it is the worst case.
    for len in [1_000usize, 10_000, 50_000] {
        let explorer = Explorer::new(synthetic(len), Size::new(1200.0, 800.0));
        group.throughput(Throughput::Elements(len as u64));

        let first = explorer.scene().markers().next().map(|m| m.screen);
        if let Some(first) = first {
            group.bench_function(BenchmarkId::new("first_marker", len), |b| {
                b.iter(|| black_box(explorer.hit_test(black_box(first))));
            });
        }
        group.bench_function(BenchmarkId::new("miss", len), |b| {
            b.iter(|| black_box(explorer.hit_test(black_box(Point::new(-500.0, -500.0)))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_hit_test);
criterion_main!(benches);
