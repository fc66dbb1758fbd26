//! Benchmarks for the Seawatch dashboard pipeline
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use seawatch::dashboard::{render, DashboardOptions, DashboardRequest};
use seawatch::export::ExportTable;
use seawatch::series::*;

fn seeded() -> GeneratorConfig {
    GeneratorConfig::default().seed(1234)
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    group.bench_function("all_series", |b| {
        let mut generator = SyntheticGenerator::new(seeded());
        b.iter(|| generator.generate_all())
    });

    let date = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();
    for lat_steps in [180, 720] {
        let config = GeneratorConfig {
            grid_lat_steps: lat_steps,
            ..seeded()
        };
        group.throughput(Throughput::Elements((lat_steps * config.grid_lon_steps) as u64));

        group.bench_function(format!("grid_{}", lat_steps), |b| {
            let mut generator = SyntheticGenerator::new(config.clone());
            b.iter(|| generator.generate_grid(black_box(date)))
        });
    }

    group.finish();
}

fn bench_filter_and_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_export");

    let series = SyntheticGenerator::new(seeded()).generate_all();
    let interval = DateInterval::new(
        NaiveDate::from_ymd_opt(2005, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    )
    .unwrap();

    group.bench_function("filter_all", |b| {
        b.iter(|| filter_all(black_box(&series), black_box(&interval)))
    });

    let filtered = filter_all(&series, &interval);
    group.bench_function("outer_join", |b| {
        b.iter(|| ExportTable::outer_join(black_box(&filtered)))
    });

    let table = ExportTable::outer_join(&filtered);
    group.bench_function("to_csv", |b| b.iter(|| table.to_csv().unwrap()));

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let options = DashboardOptions::new(seeded());
    let request = DashboardRequest::default();

    c.bench_function("dashboard_full_window", |b| {
        b.iter(|| render(black_box(&options), black_box(&request)).unwrap())
    });
}

criterion_group!(benches, bench_generation, bench_filter_and_export, bench_render);
criterion_main!(benches);
