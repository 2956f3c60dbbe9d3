//! # rankeval-core — ranking-quality metrics for binary relevance
//!
//! Given binary relevance labels and model scores for a set of items, this crate ranks
//! the items by score and measures how quickly relevant items accumulate:
//!
//! 1. **Ranking** — precision@k and recall@k at every cutoff ([`precision_and_recall_at_k`])
//! 2. **Ideal curve** — closed-form area under the best possible recall curve ([`ideal_area`])
//! 3. **Normalized AUC** — trapezoidal recall AUC divided by the ideal area ([`recall_auc`])
//!
//! ```
//! use rankeval_core::{precision_and_recall_at_k, recall_auc};
//!
//! let curves = precision_and_recall_at_k(&[1, 0, 1, 0], &[0.9, 0.8, 0.7, 0.1])?;
//! let metric = recall_auc(&curves.ks, &curves.recall_at_ks, curves.total_positive_count, None)?;
//! assert!((metric - 0.75).abs() < 1e-9);
//! # Ok::<(), rankeval_core::MetricError>(())
//! ```

pub mod auc;
pub mod config;
pub mod error;
pub mod ideal;
pub mod integrate;
pub mod ranking;

// Re-exports
pub use auc::{Evaluation, RecallAucReport, evaluate, recall_auc, recall_auc_report};
pub use config::{EvalConfig, TieBreak, load_config};
pub use error::MetricError;
pub use ideal::ideal_area;
pub use integrate::trapezoid;
pub use ranking::{
    RankingCurves, precision_and_recall_at_k, precision_and_recall_at_k_with, rank_by_score,
};
