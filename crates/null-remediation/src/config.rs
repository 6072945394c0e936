//! Configuration types for null remediation.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic setup.

use crate::strategies::StrategyKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Default name of the audit log written next to the output table.
pub const DEFAULT_LOG_FILE_NAME: &str = "null_handling_log.txt";

/// Name of the optional JSON report written next to the output table.
pub const REPORT_FILE_NAME: &str = "null_handling_report.json";

/// Constant used by the fixed-value strategy.
///
/// The value does not have to match a column's type: filling a numeric
/// column with text turns that column into text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FillValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Default for FillValue {
    fn default() -> Self {
        FillValue::Int(0)
    }
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillValue::Int(v) => write!(f, "{}", v),
            FillValue::Float(v) => write!(f, "{}", v),
            FillValue::Text(v) => f.write_str(v),
        }
    }
}

/// Integers first, then finite floats, anything else is text.
///
/// `NaN` and `inf` stay text: a non-finite float is not a usable fill.
impl FromStr for FillValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(FillValue::Int(v));
        }
        if let Ok(v) = trimmed.parse::<f64>()
            && v.is_finite()
        {
            return Ok(FillValue::Float(v));
        }
        Ok(FillValue::Text(s.to_string()))
    }
}

impl From<i64> for FillValue {
    fn from(v: i64) -> Self {
        FillValue::Int(v)
    }
}

impl From<i32> for FillValue {
    fn from(v: i32) -> Self {
        FillValue::Int(i64::from(v))
    }
}

impl From<f64> for FillValue {
    fn from(v: f64) -> Self {
        FillValue::Float(v)
    }
}

impl From<&str> for FillValue {
    fn from(v: &str) -> Self {
        FillValue::Text(v.to_string())
    }
}

/// Configuration for a remediation run.
///
/// Use [`RemediationConfig::builder()`] to create a new configuration
/// with fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use null_remediation::config::{FillValue, RemediationConfig};
///
/// let config = RemediationConfig::builder()
///     .fill_value(FillValue::Text("MISSING".into()))
///     .emit_report(true)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationConfig {
    /// Constant used by the `fixed` strategy.
    /// Default: 0
    pub fill_value: FillValue,

    /// Strategies to evaluate, in evaluation order. Order matters: on a score
    /// tie the earlier strategy wins.
    /// Default: all seven, in canonical order
    pub strategies: Vec<StrategyKind>,

    /// File name of the audit log, written in the output table's directory.
    /// Default: "null_handling_log.txt"
    pub log_file_name: String,

    /// Field separator for reading and writing tables.
    /// Default: b','
    pub separator: u8,

    /// Number of rows used for schema inference when loading.
    /// `None` scans the whole file.
    /// Default: Some(100)
    pub infer_schema_length: Option<usize>,

    /// Whether to write a JSON report next to the audit log.
    /// Default: false
    pub emit_report: bool,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            fill_value: FillValue::default(),
            strategies: StrategyKind::ALL.to_vec(),
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            separator: b',',
            infer_schema_length: Some(100),
            emit_report: false,
        }
    }
}

impl RemediationConfig {
    /// Create a new configuration builder.
    pub fn builder() -> RemediationConfigBuilder {
        RemediationConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.strategies.is_empty() {
            return Err(ConfigValidationError::NoStrategies);
        }

        let mut seen = HashSet::new();
        for kind in &self.strategies {
            if !seen.insert(*kind) {
                return Err(ConfigValidationError::DuplicateStrategy(
                    kind.name().to_string(),
                ));
            }
        }

        if let FillValue::Float(v) = self.fill_value
            && !v.is_finite()
        {
            return Err(ConfigValidationError::NonFiniteFillValue(v));
        }

        let name = self.log_file_name.trim();
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(ConfigValidationError::InvalidLogFileName(
                self.log_file_name.clone(),
            ));
        }

        if !self.separator.is_ascii() || self.separator == b'\n' || self.separator == b'"' {
            return Err(ConfigValidationError::InvalidSeparator(self.separator));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("At least one strategy must be configured")]
    NoStrategies,

    #[error("Strategy '{0}' is listed more than once")]
    DuplicateStrategy(String),

    #[error("Fill value must be finite, got {0}")]
    NonFiniteFillValue(f64),

    #[error("Invalid log file name: '{0}' (must be a plain, non-empty file name)")]
    InvalidLogFileName(String),

    #[error("Invalid separator byte: {0:#04x}")]
    InvalidSeparator(u8),
}

/// Builder for [`RemediationConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct RemediationConfigBuilder {
    fill_value: Option<FillValue>,
    strategies: Option<Vec<StrategyKind>>,
    log_file_name: Option<String>,
    separator: Option<u8>,
    infer_schema_length: Option<Option<usize>>,
    emit_report: Option<bool>,
}

impl RemediationConfigBuilder {
    /// Set the constant used by the `fixed` strategy.
    pub fn fill_value(mut self, value: impl Into<FillValue>) -> Self {
        self.fill_value = Some(value.into());
        self
    }

    /// Restrict (and order) the strategies that are evaluated.
    pub fn strategies(mut self, strategies: impl IntoIterator<Item = StrategyKind>) -> Self {
        self.strategies = Some(strategies.into_iter().collect());
        self
    }

    /// Set the audit log file name.
    pub fn log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = Some(name.into());
        self
    }

    /// Set the field separator.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set the number of rows used for schema inference.
    pub fn infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Enable or disable the JSON report.
    pub fn emit_report(mut self, emit: bool) -> Self {
        self.emit_report = Some(emit);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `RemediationConfig` or an error if validation fails.
    pub fn build(self) -> Result<RemediationConfig, ConfigValidationError> {
        let defaults = RemediationConfig::default();
        let config = RemediationConfig {
            fill_value: self.fill_value.unwrap_or(defaults.fill_value),
            strategies: self.strategies.unwrap_or(defaults.strategies),
            log_file_name: self.log_file_name.unwrap_or(defaults.log_file_name),
            separator: self.separator.unwrap_or(defaults.separator),
            infer_schema_length: self
                .infer_schema_length
                .unwrap_or(defaults.infer_schema_length),
            emit_report: self.emit_report.unwrap_or(defaults.emit_report),
        };

        config.validate()?;
        Ok(config)
    }
}
