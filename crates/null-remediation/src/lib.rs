//! Null Remediation Library
//!
//! Picks the best way to deal with missing values in a table by trying every
//! strategy and scoring the results, built with Rust and Polars.
//!
//! # Overview
//!
//! - **Strategies**: drop rows, fixed constant, column mean, median, mode,
//!   forward fill and backward fill. Each produces a fresh candidate table.
//! - **Scoring**: every candidate is scored against the original on null
//!   removal (weight 0.5), row retention (0.25) and column retention (0.25).
//! - **Selection**: the highest score wins; on a tie the earlier candidate wins.
//! - **Audit Log**: every evaluation is recorded in `null_handling_log.txt`
//!   next to the cleaned output.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use null_remediation::process_csv;
//!
//! match process_csv("data/raw.csv", "out/clean.csv")? {
//!     Some(report) => println!("Best strategy: {}", report.best_strategy),
//!     None => println!("Nothing to clean"),
//! }
//! ```
//!
//! # Working with tables directly
//!
//! ```rust,ignore
//! use null_remediation::{AuditLog, RemediationConfig, run_strategies, select_best};
//!
//! let candidates = run_strategies(&df, &RemediationConfig::default())?;
//! let mut log = AuditLog::new();
//! let selection = select_best(&df, &candidates, &mut log)?;
//! println!("{}", log.render());
//! ```
//!
//! # Configuration
//!
//! ```rust,ignore
//! use null_remediation::{NullRemediator, RemediationConfig, StrategyKind};
//!
//! let config = RemediationConfig::builder()
//!     .fill_value("MISSING")
//!     .strategies([StrategyKind::Fixed, StrategyKind::Mode, StrategyKind::ForwardFill])
//!     .emit_report(true)
//!     .build()?;
//!
//! let report = NullRemediator::builder()
//!     .config(config)
//!     .on_stage(|update| println!("[{:?}] {}", update.stage, update.message))
//!     .build()?
//!     .run("data/raw.csv".as_ref(), "out/clean.csv".as_ref())?;
//! ```

pub mod audit;
pub mod candidates;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod reporting;
pub mod scoring;
pub mod selector;
pub mod strategies;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use audit::AuditLog;
pub use candidates::CandidateSet;
pub use config::{
    ConfigValidationError, DEFAULT_LOG_FILE_NAME, FillValue, REPORT_FILE_NAME, RemediationConfig,
    RemediationConfigBuilder,
};
pub use error::{RemediationError, Result, ResultExt};
pub use io::{load_table, save_table};
pub use pipeline::{
    ClosureStageReporter, NullRemediator, NullRemediatorBuilder, PipelineStage, StageReporter,
    StageUpdate, process_csv,
};
pub use reporting::{RemediationReport, ReportGenerator};
pub use scoring::{ScoreBreakdown, evaluate_candidate, score_candidate};
pub use selector::select_best;
pub use strategies::{
    StrategyKind, backward_fill, drop_nulls, forward_fill, replace_with_fixed, replace_with_mean,
    replace_with_median, replace_with_mode, run_strategies,
};
pub use types::{Selection, StrategyScore};
pub use utils::total_null_count;
