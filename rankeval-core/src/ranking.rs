//! Ranking and precision/recall accumulation.
//!
//! Items are ranked by score, highest first, and precision and recall are computed
//! for every cutoff `k` in `0..N`. Cutoffs are 0-based: `k` covers the first `k + 1`
//! ranked items.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::TieBreak;
use crate::error::MetricError;

/// Precision and recall at every cutoff of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingCurves {
    /// Fraction of the first `k + 1` ranked items that are positive.
    pub precision_at_ks: Vec<f64>,
    /// Fraction of all positives found within the first `k + 1` ranked items.
    pub recall_at_ks: Vec<f64>,
    /// Cutoff indices `0..N`.
    pub ks: Vec<usize>,
    /// Number of positive labels in the dataset.
    pub total_positive_count: usize,
}

impl RankingCurves {
    pub fn len(&self) -> usize {
        self.ks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ks.is_empty()
    }
}

/// Compute precision@k and recall@k for every cutoff, breaking score ties by input order.
///
/// `labels` must be 0 or 1 and pair positionally with `scores`.
pub fn precision_and_recall_at_k(
    labels: &[u8],
    scores: &[f64],
) -> Result<RankingCurves, MetricError> {
    precision_and_recall_at_k_with(labels, scores, TieBreak::default())
}

/// Compute precision@k and recall@k for every cutoff with an explicit tie-break policy.
pub fn precision_and_recall_at_k_with(
    labels: &[u8],
    scores: &[f64],
    tie_break: TieBreak,
) -> Result<RankingCurves, MetricError> {
    validate_inputs(labels, scores)?;

    let total_positive_count = labels.iter().filter(|&&label| label == 1).count();
    if total_positive_count == 0 {
        return Err(MetricError::undefined(
            "recall is undefined when there are no positive labels",
        ));
    }

    let order = rank_by_score(scores, tie_break);
    let positives = total_positive_count as f64;

    let mut precision_at_ks = Vec::with_capacity(order.len());
    let mut recall_at_ks = Vec::with_capacity(order.len());
    let mut positive_count_at_k = 0usize;
    for (k, &item) in order.iter().enumerate() {
        if labels[item] == 1 {
            positive_count_at_k += 1;
        }
        let found = positive_count_at_k as f64;
        recall_at_ks.push(found / positives);
        precision_at_ks.push(found / (k + 1) as f64);
    }

    tracing::debug!(
        items = order.len(),
        positives = total_positive_count,
        %tie_break,
        "Computed precision and recall curves"
    );

    Ok(RankingCurves {
        precision_at_ks,
        recall_at_ks,
        ks: (0..order.len()).collect(),
        total_positive_count,
    })
}

/// Indices of `scores` ordered by score descending.
///
/// NaN scores rank after every other score. `0.0` and `-0.0` tie.
pub fn rank_by_score(scores: &[f64], tie_break: TieBreak) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        descending(scores[a], scores[b]).then_with(|| match tie_break {
            TieBreak::InputOrder => a.cmp(&b),
            TieBreak::ReverseInputOrder => b.cmp(&a),
        })
    });
    order
}

/// Total descending order on scores with NaN as the lowest class.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

fn validate_inputs(labels: &[u8], scores: &[f64]) -> Result<(), MetricError> {
    if labels.len() != scores.len() {
        return Err(MetricError::shape_mismatch(labels.len(), scores.len()));
    }
    if labels.is_empty() {
        return Err(MetricError::EmptyInput);
    }
    if let Some((index, &value)) = labels.iter().enumerate().find(|(_, l)| **l > 1) {
        return Err(MetricError::InvalidLabel { index, value });
    }
    if let Some(index) = scores.iter().position(|s| s.is_nan()) {
        return Err(MetricError::InvalidScore { index });
    }
    Ok(())
}
