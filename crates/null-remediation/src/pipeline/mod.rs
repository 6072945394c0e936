//! Pipeline module.
//!
//! This module provides the remediation driver and its stage reporting.

mod builder;
pub mod progress;

pub use builder::{NullRemediator, NullRemediatorBuilder, process_csv};
pub use progress::{ClosureStageReporter, PipelineStage, StageReporter, StageUpdate};
