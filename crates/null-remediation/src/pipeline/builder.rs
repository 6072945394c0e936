//! The remediation driver.
//!
//! [`NullRemediator`] loads a table, runs every configured strategy, selects
//! the best candidate and persists it together with the audit log.

use crate::audit::AuditLog;
use crate::config::{ConfigValidationError, RemediationConfig};
use crate::error::{RemediationError, Result, ResultExt};
use crate::io::{load_table, save_table};
use crate::pipeline::progress::{
    ClosureStageReporter, PipelineStage, StageReporter, StageUpdate,
};
use crate::reporting::{RemediationReport, ReportGenerator, ReportParams};
use crate::selector::select_best;
use crate::strategies::run_strategies;
use crate::utils::total_null_count;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Picks and applies the best null remediation strategy for a file.
///
/// # Example
///
/// ```rust,ignore
/// use null_remediation::{NullRemediator, RemediationConfig};
///
/// let remediator = NullRemediator::builder()
///     .config(RemediationConfig::builder().fill_value(-1).build()?)
///     .build()?;
///
/// if let Some(report) = remediator.process_csv("data/raw.csv".as_ref(), "out/clean.csv".as_ref())? {
///     println!("{} won with {:.4}", report.best_strategy, report.best_score);
/// }
/// ```
pub struct NullRemediator {
    config: RemediationConfig,
    stage_reporter: Option<Arc<dyn StageReporter>>,
}

static_assertions::assert_impl_all!(NullRemediator: Send);

impl Default for NullRemediator {
    fn default() -> Self {
        Self {
            config: RemediationConfig::default(),
            stage_reporter: None,
        }
    }
}

impl NullRemediator {
    pub fn builder() -> NullRemediatorBuilder {
        NullRemediatorBuilder::default()
    }

    pub fn config(&self) -> &RemediationConfig {
        &self.config
    }

    /// Path the audit log is written to for a given output path.
    pub fn log_path(&self, output: &Path) -> PathBuf {
        output_dir(output).join(&self.config.log_file_name)
    }

    /// Run the full pipeline.
    ///
    /// A missing input yields [`RemediationError::InputNotFound`] and a table
    /// with no rows and no columns yields [`RemediationError::EmptyInput`]. In
    /// both cases nothing is written.
    pub fn run(&self, input: &Path, output: &Path) -> Result<RemediationReport> {
        match self.run_internal(input, output) {
            Ok(report) => {
                self.report_stage(StageUpdate::complete(format!(
                    "Selected '{}'",
                    report.best_strategy
                )));
                Ok(report)
            }
            Err(e) => {
                self.report_stage(StageUpdate::failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Run the pipeline, treating a missing or empty input as a logged halt.
    ///
    /// Returns `Ok(None)` when the run halted for one of those two reasons.
    /// Any other failure is returned as an error.
    pub fn process_csv(&self, input: &Path, output: &Path) -> Result<Option<RemediationReport>> {
        match self.run(input, output) {
            Ok(report) => Ok(Some(report)),
            Err(RemediationError::InputNotFound(path)) => {
                error!("Input file not found: {}", path.display());
                Ok(None)
            }
            Err(RemediationError::EmptyInput(path)) => {
                warn!("Input file is empty, nothing to clean: {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn report_stage(&self, update: StageUpdate) {
        if let Some(reporter) = &self.stage_reporter {
            reporter.report(update);
        }
    }

    fn run_internal(&self, input: &Path, output: &Path) -> Result<RemediationReport> {
        self.report_stage(StageUpdate::new(
            PipelineStage::Loading,
            format!("Loading {}", input.display()),
        ));
        let df = load_table(input, &self.config)?;
        debug!("Loaded shape {:?}", df.shape());

        self.report_stage(StageUpdate::new(
            PipelineStage::EmptyCheck,
            "Checking for empty input",
        ));
        if df.height() == 0 && df.width() == 0 {
            return Err(RemediationError::EmptyInput(input.to_path_buf()));
        }

        let mut log = AuditLog::new();
        log.push(format!("Processing file: {}", input.display()));
        log.push(format!("Total null values: {}", total_null_count(&df)));

        self.report_stage(StageUpdate::new(
            PipelineStage::RunningStrategies,
            format!("Running {} strategies", self.config.strategies.len()),
        ));
        info!("Running {} strategies", self.config.strategies.len());
        let mut candidates = run_strategies(&df, &self.config)?;

        self.report_stage(StageUpdate::new(
            PipelineStage::Selecting,
            format!("Scoring {} candidates", candidates.len()),
        ));
        let selection = select_best(&df, &candidates, &mut log)?;

        self.report_stage(StageUpdate::new(
            PipelineStage::Persisting,
            format!("Saving '{}' to {}", selection.best, output.display()),
        ));
        let cleaned = candidates.take(&selection.best)?;
        save_table(&cleaned, output, &self.config)?;

        let log_path = self.log_path(output);
        log.write_to(&log_path)
            .context(format!("Failed to write {}", log_path.display()))?;
        info!("Cleaned CSV saved at: {}", output.display());
        debug!("Audit log saved at: {}", log_path.display());

        let mut report = RemediationReport::build(ReportParams {
            input,
            output,
            log_file: &log_path,
            original_df: &df,
            final_df: &cleaned,
            selection: &selection,
        });

        if self.config.emit_report {
            let generator = ReportGenerator::new(output_dir(output));
            let report_path = generator.write_report_to_file(&report)?;
            report.report_file = Some(report_path.display().to_string());
        }

        Ok(report)
    }
}

fn output_dir(output: &Path) -> PathBuf {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Run the pipeline with the default configuration.
///
/// See [`NullRemediator::process_csv`].
pub fn process_csv(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<Option<RemediationReport>> {
    NullRemediator::default().process_csv(input.as_ref(), output.as_ref())
}

/// Builder for [`NullRemediator`].
#[derive(Default)]
pub struct NullRemediatorBuilder {
    config: Option<RemediationConfig>,
    stage_reporter: Option<Arc<dyn StageReporter>>,
}

impl NullRemediatorBuilder {
    pub fn config(mut self, config: RemediationConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Attach a reporter notified on every stage transition.
    pub fn stage_reporter(mut self, reporter: Arc<dyn StageReporter>) -> Self {
        self.stage_reporter = Some(reporter);
        self
    }

    /// Attach a closure notified on every stage transition.
    pub fn on_stage<F>(mut self, callback: F) -> Self
    where
        F: Fn(StageUpdate) + Send + Sync + 'static,
    {
        self.stage_reporter = Some(Arc::new(ClosureStageReporter::new(callback)));
        self
    }

    pub fn build(self) -> std::result::Result<NullRemediator, ConfigValidationError> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        Ok(NullRemediator {
            config,
            stage_reporter: self.stage_reporter,
        })
    }
}
