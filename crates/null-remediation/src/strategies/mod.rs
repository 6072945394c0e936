//! Null remediation strategies.
//!
//! Every strategy maps a table to a fresh table by one policy and never mutates
//! its input. All of them keep the table's shape except [`drop_nulls`], which
//! keeps the columns but may remove any number of rows.
//!
//! - Removal: [`drop_nulls`]
//! - Constant fill: [`replace_with_fixed`]
//! - Statistical fill: [`replace_with_mean`], [`replace_with_median`], [`replace_with_mode`]
//! - Propagation: [`forward_fill`], [`backward_fill`]

mod fixed;
mod propagation;
mod removal;
mod statistical;

pub use fixed::replace_with_fixed;
pub use propagation::{backward_fill, forward_fill};
pub use removal::drop_nulls;
pub use statistical::{
    ModeValue, column_mode, replace_with_mean, replace_with_median, replace_with_mode,
};

use crate::candidates::CandidateSet;
use crate::config::{FillValue, RemediationConfig};
use crate::error::{Result, ResultExt};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The available strategies, named by their canonical candidate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Remove every row holding at least one null
    #[serde(rename = "drop")]
    Drop,
    /// Replace nulls with a constant
    #[serde(rename = "fixed")]
    Fixed,
    /// Replace nulls in numeric columns with the column mean
    #[serde(rename = "mean")]
    Mean,
    /// Replace nulls in numeric columns with the column median
    #[serde(rename = "median")]
    Median,
    /// Replace nulls with the most frequent value
    #[serde(rename = "mode")]
    Mode,
    /// Propagate the last seen value forward
    #[serde(rename = "ffill")]
    ForwardFill,
    /// Propagate the next seen value backward
    #[serde(rename = "bfill")]
    BackwardFill,
}

impl StrategyKind {
    /// Every strategy in canonical evaluation order.
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Drop,
        StrategyKind::Fixed,
        StrategyKind::Mean,
        StrategyKind::Median,
        StrategyKind::Mode,
        StrategyKind::ForwardFill,
        StrategyKind::BackwardFill,
    ];

    /// Canonical candidate name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Fixed => "fixed",
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Mode => "mode",
            Self::ForwardFill => "ffill",
            Self::BackwardFill => "bfill",
        }
    }

    /// Look a strategy up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Apply this strategy to `df`. `fill_value` is only read by `Fixed`.
    pub fn apply(&self, df: &DataFrame, fill_value: &FillValue) -> Result<DataFrame> {
        match self {
            Self::Drop => drop_nulls(df),
            Self::Fixed => replace_with_fixed(df, fill_value),
            Self::Mean => replace_with_mean(df),
            Self::Median => replace_with_median(df),
            Self::Mode => replace_with_mode(df),
            Self::ForwardFill => forward_fill(df),
            Self::BackwardFill => backward_fill(df),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run every configured strategy against `df`, in configuration order.
pub fn run_strategies(df: &DataFrame, config: &RemediationConfig) -> Result<CandidateSet> {
    let mut candidates = CandidateSet::new();

    for kind in &config.strategies {
        let candidate = kind
            .apply(df, &config.fill_value)
            .context(format!("Strategy '{}' failed", kind))?;
        debug!(
            "Strategy '{}' produced shape {:?}",
            kind,
            candidate.shape()
        );
        candidates.insert(kind.name(), candidate)?;
    }

    Ok(candidates)
}

/// Copy `df`, replacing each column that holds nulls with whatever `fill` returns.
///
/// `fill` returning `None` leaves the column as it was.
pub(crate) fn fill_null_columns<F>(df: &DataFrame, mut fill: F) -> PolarsResult<DataFrame>
where
    F: FnMut(&Series) -> PolarsResult<Option<Series>>,
{
    let mut out = df.clone();

    for column in df.get_columns() {
        if column.null_count() == 0 {
            continue;
        }
        let series = column.as_materialized_series();
        if let Some(filled) = fill(series)? {
            out.replace(series.name().as_str(), filled)?;
        }
    }

    Ok(out)
}
