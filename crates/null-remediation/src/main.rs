//! CLI entry point for null remediation.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use null_remediation::{
    FillValue, NullRemediator, RemediationConfig, RemediationReport, StrategyKind,
};
use std::path::Path;
use tracing::{debug, info};

/// CLI-compatible strategy enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliStrategy {
    /// Remove every row holding a null
    Drop,
    /// Replace nulls with --fill-value
    Fixed,
    /// Column mean (numeric columns)
    Mean,
    /// Column median (numeric columns)
    Median,
    /// Most frequent value
    Mode,
    /// Carry the last value forward
    Ffill,
    /// Carry the next value backward
    Bfill,
}

impl From<CliStrategy> for StrategyKind {
    fn from(cli: CliStrategy) -> Self {
        match cli {
            CliStrategy::Drop => StrategyKind::Drop,
            CliStrategy::Fixed => StrategyKind::Fixed,
            CliStrategy::Mean => StrategyKind::Mean,
            CliStrategy::Median => StrategyKind::Median,
            CliStrategy::Mode => StrategyKind::Mode,
            CliStrategy::Ffill => StrategyKind::ForwardFill,
            CliStrategy::Bfill => StrategyKind::BackwardFill,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Null-value remediation for CSV files",
    long_about = "Tries several null handling strategies on a CSV file, scores each \
                  candidate and keeps the best one.\n\n\
                  EXAMPLES:\n  \
                  # Clean with every strategy\n  \
                  null-remediation -i data.csv -o out/clean.csv\n\n  \
                  # Only consider fill strategies, filling constants with -1\n  \
                  null-remediation -i data.csv -o out/clean.csv --strategies fixed,mode,ffill --fill-value -1"
)]
struct Args {
    /// Path to the CSV file to clean
    #[arg(short, long)]
    input: String,

    /// Path of the cleaned CSV file
    ///
    /// The audit log is written in the same directory.
    #[arg(short, long)]
    output: String,

    /// Constant used by the `fixed` strategy
    ///
    /// Parsed as an integer, then a float, otherwise kept as text.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    fill_value: String,

    /// Strategies to evaluate, in tie-break order
    #[arg(long, value_enum, value_delimiter = ',')]
    strategies: Vec<CliStrategy>,

    /// File name of the audit log
    #[arg(long, default_value = null_remediation::DEFAULT_LOG_FILE_NAME)]
    log_file_name: String,

    /// Field separator for input and output
    #[arg(long, default_value = ",")]
    separator: char,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Output JSON to stdout instead of human-readable summary
    ///
    /// Disables all progress logs; only outputs the final JSON report.
    #[arg(long)]
    json: bool,

    /// Write a JSON report next to the cleaned output
    ///
    /// The report will be saved as null_handling_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let config = build_config(&args)?;
    debug!("Configuration: {:?}", config);

    let remediator = NullRemediator::builder().config(config).build()?;

    let report = remediator
        .process_csv(Path::new(&args.input), Path::new(&args.output))?
        .ok_or_else(|| anyhow!("Processing halted: nothing was written for {}", args.input))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(ref path) = report.report_file {
        info!("Report written to: {}", path);
    }

    if !args.quiet {
        print_human_readable_summary(&report);
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<RemediationConfig> {
    if !args.separator.is_ascii() {
        return Err(anyhow!("Separator must be a single ASCII character"));
    }

    let mut builder = RemediationConfig::builder()
        .fill_value(args.fill_value.parse::<FillValue>()?)
        .log_file_name(&args.log_file_name)
        .separator(args.separator as u8)
        .emit_report(args.emit_report);

    if !args.strategies.is_empty() {
        builder = builder.strategies(args.strategies.iter().copied().map(StrategyKind::from));
    }

    Ok(builder.build()?)
}

/// Print a human-readable summary of the run.
fn print_human_readable_summary(report: &RemediationReport) {
    println!();
    println!("{}", "=".repeat(60));
    println!("NULL REMEDIATION COMPLETE");
    println!("{}", "=".repeat(60));
    println!();

    println!(
        "Input:  {} ({} rows x {} columns, {} nulls)",
        report.input_file, report.original_shape.0, report.original_shape.1, report.nulls_before
    );
    println!(
        "Output: {} ({} rows x {} columns, {} nulls)",
        report.output_file, report.final_shape.0, report.final_shape.1, report.nulls_after
    );
    println!("Log:    {}", report.log_file);
    println!();

    println!("Candidates:");
    for candidate in &report.candidates {
        let marker = if candidate.name == report.best_strategy { "*" } else { " " };
        println!(
            "  {} {:<8} score {:.4}  remaining nulls {}  shape ({}, {})",
            marker,
            candidate.name,
            candidate.score,
            candidate.breakdown.remaining_nulls,
            candidate.breakdown.rows,
            candidate.breakdown.cols
        );
    }
    println!();

    println!(
        "Best strategy: {} (score {:.4})",
        report.best_strategy, report.best_score
    );
    println!();
    println!("Use --json for machine-readable output");
    println!("Use --emit-report to save a JSON report");
    println!("{}", "=".repeat(60));
}
