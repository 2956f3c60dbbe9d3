//! Recall@k AUC normalized by the best achievable recall@k AUC.

use serde::{Deserialize, Serialize};

use crate::config::EvalConfig;
use crate::error::MetricError;
use crate::ideal::ideal_area;
use crate::integrate::trapezoid;
use crate::ranking::{RankingCurves, precision_and_recall_at_k_with};

/// Recall reaches its maximum at 1.0.
const RECALL_HEIGHT: f64 = 1.0;

/// Breakdown of a normalized recall@k AUC computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallAucReport {
    /// Number of leading cutoffs the areas were computed over.
    pub cutoff: usize,
    /// Trapezoidal area under the actual recall curve.
    pub actual_auc: f64,
    /// Area under the ideal recall curve up to `cutoff`.
    pub perfect_auc: f64,
    /// `actual_auc / perfect_auc`.
    pub metric: f64,
}

/// Curves and normalized AUC for one labelled, scored dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub curves: RankingCurves,
    pub report: RecallAucReport,
}

/// Normalized recall@k AUC.
///
/// With `k` set, only the first `k` cutoffs are integrated and the ideal curve is cut at
/// the same width. A `k` past the end of the curve is clamped to its length.
pub fn recall_auc(
    ks: &[usize],
    recall_at_ks: &[f64],
    total_positive_count: usize,
    k: Option<usize>,
) -> Result<f64, MetricError> {
    recall_auc_report(ks, recall_at_ks, total_positive_count, k).map(|report| report.metric)
}

/// Same as [`recall_auc`], keeping the intermediate areas.
pub fn recall_auc_report(
    ks: &[usize],
    recall_at_ks: &[f64],
    total_positive_count: usize,
    k: Option<usize>,
) -> Result<RecallAucReport, MetricError> {
    if ks.len() != recall_at_ks.len() {
        return Err(MetricError::shape_mismatch(ks.len(), recall_at_ks.len()));
    }

    let len = recall_at_ks.len();
    let requested = k.unwrap_or(len);
    if requested > len {
        tracing::warn!(
            requested,
            available = len,
            "Cutoff exceeds ranking length, clamping"
        );
    }
    let width = requested.min(len);

    if total_positive_count == 0 {
        return Err(MetricError::undefined(
            "normalized recall AUC is undefined when there are no positive labels",
        ));
    }
    if width == 0 {
        return Err(MetricError::undefined(
            "normalized recall AUC is undefined for an empty cutoff",
        ));
    }

    let xs: Vec<f64> = ks[..width].iter().map(|&k| k as f64).collect();
    let actual_auc = trapezoid(&xs, &recall_at_ks[..width])?;
    let perfect_auc = ideal_area(width as f64, total_positive_count as f64, RECALL_HEIGHT)?;
    let metric = actual_auc / perfect_auc;

    tracing::debug!(
        cutoff = width,
        actual_auc,
        perfect_auc,
        metric,
        "Computed normalized recall AUC"
    );

    Ok(RecallAucReport {
        cutoff: width,
        actual_auc,
        perfect_auc,
        metric,
    })
}

/// Rank `labels`/`scores` and score the resulting recall curve using `config`.
pub fn evaluate(
    labels: &[u8],
    scores: &[f64],
    config: &EvalConfig,
) -> Result<Evaluation, MetricError> {
    let curves = precision_and_recall_at_k_with(labels, scores, config.tie_break)?;
    let report = recall_auc_report(
        &curves.ks,
        &curves.recall_at_ks,
        curves.total_positive_count,
        config.cutoff,
    )?;

    tracing::info!(
        items = curves.len(),
        positives = curves.total_positive_count,
        cutoff = report.cutoff,
        metric = report.metric,
        "Evaluated ranking"
    );

    Ok(Evaluation { curves, report })
}
