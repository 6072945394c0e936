use crate::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};

// ============================================================================
// Scoring Results
// ============================================================================

/// Score of one named candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyScore {
    /// Candidate name (the strategy that produced it).
    pub name: String,
    /// Final weighted score.
    pub score: f64,
    /// Intermediates the score was computed from.
    pub breakdown: ScoreBreakdown,
}

impl StrategyScore {
    pub fn new(name: impl Into<String>, breakdown: ScoreBreakdown) -> Self {
        Self {
            name: name.into(),
            score: breakdown.score,
            breakdown,
        }
    }
}

/// Outcome of a selection pass over a candidate set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Name of the winning candidate.
    pub best: String,
    pub best_score: f64,
    /// Every candidate's score, in evaluation order.
    pub scores: Vec<StrategyScore>,
}

impl Selection {
    /// Score entry for the winning candidate.
    pub fn winner(&self) -> Option<&StrategyScore> {
        self.scores.iter().find(|s| s.name == self.best)
    }
}
