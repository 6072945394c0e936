//! Statistical fills: mean, median and mode.
//!
//! Mean and median only touch numeric columns, and a column with no values
//! has no statistic, so its nulls stay. Mode works on every column and
//! falls back to `0` (numeric) or `"Unknown"` (anything else) when a column
//! holds no values at all.

use super::fill_null_columns;
use crate::error::Result;
use crate::utils::{
    fill_integer_nulls, fill_numeric_nulls, fill_string_nulls, is_integer_dtype, is_numeric_like,
};
use polars::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Fill used by mode for an all-null non-numeric column.
pub const UNKNOWN_FILL: &str = "Unknown";

/// Most frequent value of a column, in the column's own kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Replace nulls in each numeric column with the mean of its values.
pub fn replace_with_mean(df: &DataFrame) -> Result<DataFrame> {
    fill_numeric_statistic(df, "mean", |series| series.mean())
}

/// Replace nulls in each numeric column with the median of its values.
pub fn replace_with_median(df: &DataFrame) -> Result<DataFrame> {
    fill_numeric_statistic(df, "median", |series| series.median())
}

/// Replace nulls in every column with the column's most frequent value.
///
/// Ties go to the value that sorts first.
pub fn replace_with_mode(df: &DataFrame) -> Result<DataFrame> {
    let out = fill_null_columns(df, |series| {
        let mode = match column_mode(series)? {
            Some(mode) => mode,
            None => empty_column_fallback(series.dtype()),
        };
        debug!("mode: filling '{}' with {:?}", series.name(), mode);

        let filled = match mode {
            ModeValue::Int(v) => fill_integer_nulls(series, v)?,
            ModeValue::Float(v) => fill_numeric_nulls(series, v)?,
            ModeValue::Text(v) => fill_string_nulls(series, &v)?,
        };
        Ok(Some(filled))
    })?;

    Ok(out)
}

/// Most frequent non-null value of `series`, or `None` if it has none.
///
/// Integers are compared by value, floats by total order and everything
/// else by its text form.
pub fn column_mode(series: &Series) -> PolarsResult<Option<ModeValue>> {
    let non_null = series.drop_nulls();
    if non_null.is_empty() {
        return Ok(None);
    }

    let dtype = series.dtype();
    let mode = if is_integer_dtype(dtype) {
        let casted = non_null.cast(&DataType::Int64)?;
        let values: Vec<i64> = casted.i64()?.into_no_null_iter().collect();
        sorted_mode(values, |a, b| a.cmp(b)).map(ModeValue::Int)
    } else if is_numeric_like(dtype) {
        let casted = non_null.cast(&DataType::Float64)?;
        let values: Vec<f64> = casted.f64()?.into_no_null_iter().collect();
        sorted_mode(values, |a, b| a.total_cmp(b)).map(ModeValue::Float)
    } else {
        let casted = non_null.cast(&DataType::String)?;
        let values: Vec<String> = casted
            .str()?
            .into_no_null_iter()
            .map(str::to_string)
            .collect();
        sorted_mode(values, |a, b| a.cmp(b)).map(ModeValue::Text)
    };

    Ok(mode)
}

fn empty_column_fallback(dtype: &DataType) -> ModeValue {
    if is_integer_dtype(dtype) {
        ModeValue::Int(0)
    } else if is_numeric_like(dtype) {
        ModeValue::Float(0.0)
    } else {
        ModeValue::Text(UNKNOWN_FILL.to_string())
    }
}

/// Sort, then pick the longest run. Only a strictly longer run replaces the
/// current best, so ties resolve to the smallest value.
fn sorted_mode<T, F>(mut values: Vec<T>, cmp: F) -> Option<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    values.sort_by(&cmp);

    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;
    while start < values.len() {
        let mut end = start + 1;
        while end < values.len() && cmp(&values[start], &values[end]) == Ordering::Equal {
            end += 1;
        }
        let count = end - start;
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((start, count));
        }
        start = end;
    }

    best.map(|(idx, _)| values.swap_remove(idx))
}

fn fill_numeric_statistic<F>(df: &DataFrame, method: &str, statistic: F) -> Result<DataFrame>
where
    F: Fn(&Series) -> Option<f64>,
{
    let out = fill_null_columns(df, |series| {
        if !is_numeric_like(series.dtype()) {
            return Ok(None);
        }
        match statistic(series) {
            Some(value) if !value.is_nan() => {
                debug!("{}: filling '{}' with {:.4}", method, series.name(), value);
                Ok(Some(fill_numeric_nulls(series, value)?))
            }
            // No values to summarise: filling with null changes nothing
            _ => Ok(None),
        }
    })?;

    Ok(out)
}
