//! Run reports.
//!
//! [`RemediationReport`] summarises one remediation run: what was read, what
//! every candidate scored and which one was written. The CLI prints it with
//! `--json`; [`ReportGenerator`] writes it next to the cleaned output when
//! `emit_report` is set.

mod generator;

pub use generator::{RemediationReport, ReportGenerator, ReportParams};
