use crate::config::REPORT_FILE_NAME;
use crate::error::{Result, ResultExt};
use crate::types::{Selection, StrategyScore};
use crate::utils::total_null_count;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Summary of one remediation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationReport {
    /// Local time the report was built
    pub generated_at: String,
    pub input_file: String,
    pub output_file: String,
    pub log_file: String,
    /// Set once the report itself has been written to disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_file: Option<String>,

    pub original_shape: (usize, usize),
    pub final_shape: (usize, usize),
    pub nulls_before: usize,
    pub nulls_after: usize,

    pub best_strategy: String,
    pub best_score: f64,
    /// Every candidate, in evaluation order
    pub candidates: Vec<StrategyScore>,
}

/// Inputs for [`RemediationReport::build`].
pub struct ReportParams<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub log_file: &'a Path,
    pub original_df: &'a DataFrame,
    pub final_df: &'a DataFrame,
    pub selection: &'a Selection,
}

impl RemediationReport {
    pub fn build(params: ReportParams<'_>) -> Self {
        let ReportParams {
            input,
            output,
            log_file,
            original_df,
            final_df,
            selection,
        } = params;

        RemediationReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input.display().to_string(),
            output_file: output.display().to_string(),
            log_file: log_file.display().to_string(),
            report_file: None,
            original_shape: original_df.shape(),
            final_shape: final_df.shape(),
            nulls_before: total_null_count(original_df),
            nulls_after: total_null_count(final_df),
            best_strategy: selection.best.clone(),
            best_score: selection.best_score,
            candidates: selection.scores.clone(),
        }
    }

    /// Nulls removed by the winning candidate. Negative if it added nulls.
    pub fn nulls_removed(&self) -> i64 {
        self.nulls_before as i64 - self.nulls_after as i64
    }

    pub fn rows_removed(&self) -> usize {
        self.original_shape.0.saturating_sub(self.final_shape.0)
    }
}

/// Writes reports into an output directory.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write `report` as pretty JSON to `<output_dir>/null_handling_report.json`.
    pub fn write_report_to_file(&self, report: &RemediationReport) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .context(format!("Failed to create {}", self.output_dir.display()))?;

        let report_path = self.output_dir.join(REPORT_FILE_NAME);
        let mut file = File::create(&report_path)
            .context(format!("Failed to create {}", report_path.display()))?;
        file.write_all(serde_json::to_string_pretty(report)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::score_candidate;
    use pretty_assertions::assert_eq;

    fn sample_report() -> RemediationReport {
        let original = df!["A" => [Some(1.0), None, Some(3.0)]].unwrap();
        let filled = df!["A" => [1.0, 0.0, 3.0]].unwrap();
        let selection = Selection {
            best: "fixed".to_string(),
            best_score: 1.0,
            scores: vec![StrategyScore::new("fixed", score_candidate(&original, &filled))],
        };

        RemediationReport::build(ReportParams {
            input: Path::new("in/data.csv"),
            output: Path::new("out/clean.csv"),
            log_file: Path::new("out/null_handling_log.txt"),
            original_df: &original,
            final_df: &filled,
            selection: &selection,
        })
    }

    #[test]
    fn test_build_report() {
        let report = sample_report();

        assert_eq!(report.best_strategy, "fixed");
        assert_eq!(report.original_shape, (3, 1));
        assert_eq!(report.nulls_before, 1);
        assert_eq!(report.nulls_after, 0);
        assert_eq!(report.nulls_removed(), 1);
        assert_eq!(report.rows_removed(), 0);
        assert_eq!(report.candidates.len(), 1);
        assert!(report.report_file.is_none());
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ReportGenerator::new(dir.path().join("nested"));
        let report = sample_report();

        let path = generator.write_report_to_file(&report).unwrap();

        assert_eq!(path.file_name().unwrap(), REPORT_FILE_NAME);
        let back: RemediationReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report);
    }
}
