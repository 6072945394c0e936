//! Reading and writing delimited tables.

use crate::config::RemediationConfig;
use crate::error::{RemediationError, Result, ResultExt};
use crate::utils::is_all_null;
use polars::prelude::*;
use std::fs::{self, File};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Cell contents read as missing, in addition to empty cells.
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Load a delimited file with a header row.
///
/// A file holding only whitespace loads as an empty (0x0) table. Empty cells,
/// the [`NULL_MARKERS`] and floating-point NaN all load as nulls. If parsing
/// with the configured inference window fails, the whole file is scanned for
/// the schema; if that fails too the content is cleaned (blank lines dropped,
/// doubled quotes collapsed) and parsed once more. Columns where every cell is
/// null come back as `Float64`.
pub fn load_table(path: &Path, config: &RemediationConfig) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(RemediationError::InputNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    if content.trim().is_empty() {
        debug!("{} holds no data", path.display());
        return Ok(DataFrame::empty());
    }

    let df = load_csv_with_fallbacks(&content, config)
        .context(format!("Failed to parse {}", path.display()))?;

    let df = normalize_missing(df)?;
    debug!("Loaded {} with shape {:?}", path.display(), df.shape());
    Ok(df)
}

/// Write `df` as a delimited file with a header row, creating parent directories.
pub fn save_table(df: &DataFrame, path: &Path, config: &RemediationConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file =
        File::create(path).context(format!("Failed to create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(config.separator)
        .finish(&mut df.clone())
        .context(format!("Failed to write {}", path.display()))?;

    Ok(())
}

fn load_csv_with_fallbacks(content: &str, config: &RemediationConfig) -> PolarsResult<DataFrame> {
    // Strategy 1: configured inference window
    match parse_csv(content.as_bytes().to_vec(), config.infer_schema_length, config) {
        Ok(df) => return Ok(df),
        Err(e) => debug!("Standard loading failed: {}", e),
    }

    // Strategy 2: infer the schema from every row
    if config.infer_schema_length.is_some() {
        match parse_csv(content.as_bytes().to_vec(), None, config) {
            Ok(df) => return Ok(df),
            Err(e) => debug!("Full-scan loading failed: {}", e),
        }
    }

    // Strategy 3: pre-clean content
    parse_csv(clean_csv_content(content).into_bytes(), None, config)
}

fn parse_csv(
    bytes: Vec<u8>,
    infer_schema_length: Option<usize>,
    config: &RemediationConfig,
) -> PolarsResult<DataFrame> {
    let null_values = NullValues::AllColumns(NULL_MARKERS.iter().map(|m| (*m).into()).collect());

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_schema_length)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(config.separator)
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(null_values)),
        )
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
}

fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn float NaN into null, then widen columns with no observed values.
///
/// A column without a single value carries no type information; it is treated
/// as floating point so numeric fills apply to it.
fn normalize_missing(mut df: DataFrame) -> Result<DataFrame> {
    let float_cols: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| matches!(col.dtype(), DataType::Float32 | DataType::Float64))
        .map(|col| col.name().to_string())
        .collect();

    for name in float_cols {
        if let Some(cleaned) = nan_to_null(df.column(&name)?.as_materialized_series())? {
            df.replace(&name, cleaned)?;
        }
    }

    if df.height() == 0 {
        return Ok(df);
    }

    let targets: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|col| is_all_null(col.as_materialized_series()))
        .filter(|col| col.dtype() != &DataType::Float64)
        .map(|col| col.name().to_string())
        .collect();

    for name in targets {
        let widened = df.column(&name)?.as_materialized_series().cast(&DataType::Float64)?;
        df.replace(&name, widened)?;
    }

    Ok(df)
}

/// `None` when the series holds no NaN.
fn nan_to_null(series: &Series) -> PolarsResult<Option<Series>> {
    let values = series.cast(&DataType::Float64)?;
    let ca = values.f64()?;
    if !ca.into_iter().any(|v| v.is_some_and(f64::is_nan)) {
        return Ok(None);
    }

    let cleaned: Vec<Option<f64>> = ca.into_iter().map(|v| v.filter(|x| !x.is_nan())).collect();
    Ok(Some(Series::new(series.name().clone(), cleaned)))
}
