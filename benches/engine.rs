//! Benchmarks for the diagnostic engine across segment lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forecast_triage::core::ItemSeries;
use forecast_triage::engine::DiagnosticEngine;

fn make_item(hist_len: usize, fcst_len: usize) -> ItemSeries {
    let actuals: Vec<f64> = (0..hist_len)
        .map(|i| {
            100.0
                + 0.8 * i as f64
                + 20.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin()
        })
        .collect();
    let forecasts: Vec<f64> = (0..fcst_len).map(|i| 140.0 + 0.5 * i as f64).collect();
    ItemSeries::from_history_and_forecast("bench-item", 0, actuals, forecasts).unwrap()
}

fn bench_diagnose(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnose");
    let engine = DiagnosticEngine::default();

    for (hist_len, fcst_len) in [(24, 12), (48, 18), (120, 24), (600, 60)] {
        let item = make_item(hist_len, fcst_len);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}h_{}f", hist_len, fcst_len)),
            &item,
            |b, item| b.iter(|| engine.diagnose(black_box(item))),
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let engine = DiagnosticEngine::default();
    let items: Vec<ItemSeries> = (0..100).map(|_| make_item(48, 18)).collect();

    c.bench_function("diagnose_batch_100_items", |b| {
        b.iter(|| engine.diagnose_batch(black_box(&items)))
    });
}

criterion_group!(benches, bench_diagnose, bench_batch);
criterion_main!(benches);
