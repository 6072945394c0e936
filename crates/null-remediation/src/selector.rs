//! Best-candidate selection.

use crate::audit::AuditLog;
use crate::candidates::CandidateSet;
use crate::error::{RemediationError, Result};
use crate::scoring::evaluate_candidate;
use crate::types::{Selection, StrategyScore};
use polars::prelude::DataFrame;
use tracing::{debug, info};

/// Score every candidate in iteration order and pick the highest.
///
/// Only a strictly greater score replaces the current best, so on a tie the
/// earliest candidate wins. Appends five lines per candidate and then a single
/// `✅ Best strategy selected: <name>` line.
///
/// An empty candidate set is an error and leaves `log` untouched.
pub fn select_best(
    original: &DataFrame,
    candidates: &CandidateSet,
    log: &mut AuditLog,
) -> Result<Selection> {
    if candidates.is_empty() {
        return Err(RemediationError::EmptyCandidateSet);
    }

    let mut scores: Vec<StrategyScore> = Vec::with_capacity(candidates.len());
    let mut best: Option<usize> = None;
    let mut best_score = f64::NEG_INFINITY;

    for (name, candidate) in candidates.iter() {
        let result = evaluate_candidate(name, original, candidate, log);
        if result.score > best_score {
            debug!("'{}' takes the lead with {:.4}", name, result.score);
            best_score = result.score;
            best = Some(scores.len());
        }
        scores.push(result);
    }

    // NaN scores never win a comparison; fall back to the first candidate.
    let best_idx = best.unwrap_or(0);
    let best_name = scores[best_idx].name.clone();
    let best_score = scores[best_idx].score;

    log.push(format!("✅ Best strategy selected: {}", best_name));
    info!("Best strategy selected: {} (score {:.4})", best_name, best_score);

    Ok(Selection {
        best: best_name,
        best_score,
        scores,
    })
}
