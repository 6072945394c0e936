//! Candidate scoring.
//!
//! A candidate is judged against the original table on three ratios:
//!
//! ```text
//! null_term = nulls_removed / original_nulls   (1.0 when the original has no nulls)
//! row_term  = candidate_rows / original_rows   (0.0 when the original has no rows)
//! col_term  = candidate_cols / original_cols   (0.0 when the original has no columns)
//! score     = 0.5 * null_term + 0.25 * row_term + 0.25 * col_term
//! ```
//!
//! The score is not clamped. A candidate with more rows or columns than the
//! original scores above 1.0, and one with more nulls scores a negative null term.

use crate::audit::AuditLog;
use crate::types::StrategyScore;
use crate::utils::{shape_label, total_null_count};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weight of the null-removal ratio.
pub const NULL_WEIGHT: f64 = 0.5;
/// Weight of the row-retention ratio.
pub const ROW_WEIGHT: f64 = 0.25;
/// Weight of the column-retention ratio.
pub const COL_WEIGHT: f64 = 0.25;

/// Every intermediate of one (original, candidate) evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub original_nulls: usize,
    pub remaining_nulls: usize,
    /// Negative when the candidate holds more nulls than the original.
    pub nulls_removed: i64,
    pub rows: usize,
    pub cols: usize,
    pub null_term: f64,
    pub row_term: f64,
    pub col_term: f64,
    pub score: f64,
}

/// Score `candidate` against `original`. Pure; touches no log.
pub fn score_candidate(original: &DataFrame, candidate: &DataFrame) -> ScoreBreakdown {
    let original_nulls = total_null_count(original);
    let remaining_nulls = total_null_count(candidate);
    let nulls_removed = original_nulls as i64 - remaining_nulls as i64;

    let null_term = if original_nulls > 0 {
        nulls_removed as f64 / original_nulls as f64
    } else {
        1.0
    };
    let row_term = ratio(candidate.height(), original.height());
    let col_term = ratio(candidate.width(), original.width());

    ScoreBreakdown {
        original_nulls,
        remaining_nulls,
        nulls_removed,
        rows: candidate.height(),
        cols: candidate.width(),
        null_term,
        row_term,
        col_term,
        score: NULL_WEIGHT * null_term + ROW_WEIGHT * row_term + COL_WEIGHT * col_term,
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64
    } else {
        0.0
    }
}

/// Score one named candidate and append its five audit lines.
pub fn evaluate_candidate(
    name: &str,
    original: &DataFrame,
    candidate: &DataFrame,
    log: &mut AuditLog,
) -> StrategyScore {
    let breakdown = score_candidate(original, candidate);

    log.push(format!("Method tried: {}", name));
    log.push(format!("Nulls removed: {}", breakdown.nulls_removed));
    log.push(format!("Remaining nulls: {}", breakdown.remaining_nulls));
    log.push(format!("Shape after cleaning: {}", shape_label(candidate)));
    log.push(format!("Strategy score: {:.4}", breakdown.score));

    debug!(
        "Candidate '{}': null_term={:.4} row_term={:.4} col_term={:.4} score={:.4}",
        name, breakdown.null_term, breakdown.row_term, breakdown.col_term, breakdown.score
    );

    StrategyScore::new(name, breakdown)
}
