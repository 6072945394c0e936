//! Shared column helpers used by the strategies, the scorer and table I/O.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Check if a DataType is an integer type.
#[inline]
pub fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Numeric, or the `Null` dtype of a column that never held a value.
///
/// An all-missing column has no concrete type; it is handled like a float column.
#[inline]
pub fn is_numeric_like(dtype: &DataType) -> bool {
    is_numeric_dtype(dtype) || matches!(dtype, DataType::Null)
}

// =============================================================================
// Table Statistics
// =============================================================================

/// Total number of null cells across all columns.
pub fn total_null_count(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|col| col.null_count()).sum()
}

/// Shape rendered as `(rows, columns)`.
pub fn shape_label(df: &DataFrame) -> String {
    format!("({}, {})", df.height(), df.width())
}

/// True when every cell of the series is null (including the zero-length case).
#[inline]
pub fn is_all_null(series: &Series) -> bool {
    series.null_count() == series.len()
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill null values with a float, producing a `Float64` series.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let casted = series.cast(&DataType::Float64)?;
    let values: Vec<Option<f64>> = casted
        .f64()?
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value)))
        .collect();

    Ok(Series::new(series.name().clone(), values))
}

/// Fill null values with an integer, producing an `Int64` series.
pub fn fill_integer_nulls(series: &Series, fill_value: i64) -> PolarsResult<Series> {
    let casted = series.cast(&DataType::Int64)?;
    let values: Vec<Option<i64>> = casted
        .i64()?
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value)))
        .collect();

    Ok(Series::new(series.name().clone(), values))
}

/// Fill null values with text, producing a `String` series.
///
/// Non-null values keep their textual representation.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let casted = series.cast(&DataType::String)?;
    let values: Vec<Option<String>> = casted
        .str()?
        .into_iter()
        .map(|v| Some(v.unwrap_or(fill_value).to_string()))
        .collect();

    Ok(Series::new(series.name().clone(), values))
}

// =============================================================================
// Tests
// =============================================================================
