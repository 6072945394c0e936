//! Stage reporting for a remediation run.
//!
//! A run moves through a fixed sequence of stages. A [`StageReporter`]
//! attached to the [`NullRemediator`](crate::NullRemediator) is told about
//! every transition.
//!
//! # Example
//!
//! ```rust,ignore
//! use null_remediation::NullRemediator;
//!
//! let remediator = NullRemediator::builder()
//!     .on_stage(|update| println!("[{}] {}", update.stage.display_name(), update.message))
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

/// Stages of a remediation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Reading the input table
    Loading,
    /// Checking for an empty input
    EmptyCheck,
    /// Applying every configured strategy
    RunningStrategies,
    /// Scoring candidates and picking the best
    Selecting,
    /// Writing the cleaned table and the audit log
    Persisting,
    /// Run finished and artifacts written
    Complete,
    /// Run halted or failed
    Failed,
}

impl PipelineStage {
    /// Returns a human-readable name for the stage.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::EmptyCheck => "Checking Input",
            Self::RunningStrategies => "Running Strategies",
            Self::Selecting => "Selecting Strategy",
            Self::Persisting => "Saving Output",
            Self::Complete => "Complete",
            Self::Failed => "Failed",
        }
    }

    /// True for `Complete` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

/// One stage transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageUpdate {
    pub stage: PipelineStage,
    /// Human-readable message describing current activity
    pub message: String,
}

impl StageUpdate {
    pub fn new(stage: PipelineStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }

    pub fn complete(message: impl Into<String>) -> Self {
        Self::new(PipelineStage::Complete, message)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(PipelineStage::Failed, message)
    }
}

/// Receives stage transitions during a run.
///
/// Implementations must be `Send + Sync` so a remediator can be moved to a
/// worker thread with its reporter attached.
pub trait StageReporter: Send + Sync {
    fn report(&self, update: StageUpdate);
}

/// [`StageReporter`] backed by a closure.
pub struct ClosureStageReporter<F>
where
    F: Fn(StageUpdate) + Send + Sync,
{
    callback: F,
}

impl<F> ClosureStageReporter<F>
where
    F: Fn(StageUpdate) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> StageReporter for ClosureStageReporter<F>
where
    F: Fn(StageUpdate) + Send + Sync,
{
    fn report(&self, update: StageUpdate) {
        (self.callback)(update);
    }
}

static_assertions::assert_impl_all!(StageUpdate: Send, Sync);
