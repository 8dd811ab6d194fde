use std::hint::black_box;

use coteg::egui_app::view_model;
use coteg::predict::{GO_EMOTIONS, ModelResult};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn sample_result() -> ModelResult {
    let scores: serde_json::Map<String, serde_json::Value> = GO_EMOTIONS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let score = ((i * 37) % 100) as f64 / 100.0;
            (label.to_string(), serde_json::json!(score))
        })
        .collect();
    serde_json::from_value(serde_json::json!({
        "predicted": ["joy", "nervousness", "relief"],
        "scores": scores,
        "thresholds": {"joy": 0.35, "grief": 0.6},
        "metrics": {"macro_f1": 0.51, "weighted_f1": 0.58, "exact_accuracy": 0.44, "hamming_loss": 0.031}
    }))
    .expect("sample result")
}

fn bench_score_rows(c: &mut Criterion) {
    let result = sample_result();
    for show_all in [false, true] {
        c.bench_with_input(
            BenchmarkId::new("score_rows", if show_all { "all" } else { "collapsed" }),
            &result,
            |b, result| b.iter(|| view_model::score_rows(black_box(result), show_all)),
        );
    }
}

fn bench_metric_rows(c: &mut Criterion) {
    let result = sample_result();
    let metrics = result.displayed_metrics().expect("metrics");
    c.bench_function("metric_rows", |b| {
        b.iter(|| view_model::metric_rows(black_box(metrics), true))
    });
}

criterion_group!(benches, bench_score_rows, bench_metric_rows);
criterion_main!(benches);
