//! Custom error types for null remediation.
//!
//! This module provides the error hierarchy using `thiserror`. Two conditions
//! (missing input, empty input) are recoverable: the driver logs them and halts
//! without writing anything. Everything else is fatal to the run.
//!
//! Errors are serializable so they can be embedded in JSON output.

use serde::Serialize;
use serde::ser::SerializeStruct;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for null remediation.
#[derive(Error, Debug)]
pub enum RemediationError {
    /// Input path does not resolve to an existing file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Loaded table has no rows and no columns.
    #[error("Input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    /// Selector invoked without any candidates.
    #[error("Cannot select a strategy from an empty candidate set")]
    EmptyCandidateSet,

    /// A candidate with this name already exists in the set.
    #[error("Candidate '{0}' already present in candidate set")]
    DuplicateCandidate(String),

    /// No candidate with this name exists in the set.
    #[error("Candidate '{0}' not found in candidate set")]
    UnknownCandidate(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RemediationError>,
    },
}

impl RemediationError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        RemediationError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InputNotFound(_) => "INPUT_NOT_FOUND",
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::EmptyCandidateSet => "EMPTY_CANDIDATE_SET",
            Self::DuplicateCandidate(_) => "DUPLICATE_CANDIDATE",
            Self::UnknownCandidate(_) => "UNKNOWN_CANDIDATE",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error is one the driver handles by logging and halting.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InputNotFound(_) | Self::EmptyInput(_) => true,
            Self::WithContext { source, .. } => source.is_recoverable(),
            _ => false,
        }
    }
}

impl From<crate::config::ConfigValidationError> for RemediationError {
    fn from(err: crate::config::ConfigValidationError) -> Self {
        RemediationError::InvalidConfig(err.to_string())
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for RemediationError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("RemediationError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for remediation operations.
pub type Result<T> = std::result::Result<T, RemediationError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RemediationError::Polars(e).with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RemediationError::Io(e).with_context(context))
    }
}
