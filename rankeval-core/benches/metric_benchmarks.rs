use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rankeval_core::{
    EvalConfig, TieBreak, evaluate, ideal_area, precision_and_recall_at_k, recall_auc,
};

/// Deterministic labels and scores: roughly one positive in five, scores scrambled by a
/// multiplicative hash so the ranking is not the input order.
fn synthetic_dataset(n: usize) -> (Vec<u8>, Vec<f64>) {
    let labels = (0..n).map(|i| u8::from(i % 5 == 0)).collect();
    let scores = (0..n)
        .map(|i| ((i as u64).wrapping_mul(2_654_435_761) % 1_000_003) as f64 / 1_000_003.0)
        .collect();
    (labels, scores)
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision_and_recall_at_k");
    for n in [100, 10_000, 100_000] {
        let (labels, scores) = synthetic_dataset(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| precision_and_recall_at_k(black_box(&labels), black_box(&scores)))
        });
    }
    group.finish();
}

fn bench_recall_auc(c: &mut Criterion) {
    let (labels, scores) = synthetic_dataset(10_000);
    let curves = match precision_and_recall_at_k(&labels, &scores) {
        Ok(curves) => curves,
        Err(e) => panic!("synthetic dataset must be valid: {e}"),
    };

    c.bench_function("recall_auc_full", |b| {
        b.iter(|| {
            recall_auc(
                black_box(&curves.ks),
                black_box(&curves.recall_at_ks),
                curves.total_positive_count,
                None,
            )
        })
    });

    c.bench_function("recall_auc_top_100", |b| {
        b.iter(|| {
            recall_auc(
                black_box(&curves.ks),
                black_box(&curves.recall_at_ks),
                curves.total_positive_count,
                Some(100),
            )
        })
    });

    c.bench_function("ideal_area", |b| {
        b.iter(|| ideal_area(black_box(10_000.0), black_box(2_000.0), 1.0))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let (labels, scores) = synthetic_dataset(10_000);
    let config = EvalConfig {
        cutoff: Some(1_000),
        tie_break: TieBreak::ReverseInputOrder,
    };
    c.bench_function("evaluate_10k", |b| {
        b.iter(|| evaluate(black_box(&labels), black_box(&scores), &config))
    });
}

criterion_group!(benches, bench_ranking, bench_recall_auc, bench_evaluate);
criterion_main!(benches);
