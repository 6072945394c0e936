//! Constant fill.

use super::fill_null_columns;
use crate::config::FillValue;
use crate::error::Result;
use crate::utils::{
    fill_integer_nulls, fill_numeric_nulls, fill_string_nulls, is_integer_dtype, is_numeric_like,
};
use polars::prelude::*;
use tracing::debug;

/// Replace every null, in every column, with `value`.
///
/// The value is not required to match the column type. An integer keeps an
/// integer column integral, turns other numeric columns into floats and is
/// written as text into text columns. A text value turns every column it
/// touches into text.
pub fn replace_with_fixed(df: &DataFrame, value: &FillValue) -> Result<DataFrame> {
    let out = fill_null_columns(df, |series| {
        let dtype = series.dtype();
        let filled = match value {
            FillValue::Int(v) if is_integer_dtype(dtype) => fill_integer_nulls(series, *v)?,
            FillValue::Int(v) if is_numeric_like(dtype) => fill_numeric_nulls(series, *v as f64)?,
            FillValue::Float(v) if is_numeric_like(dtype) => fill_numeric_nulls(series, *v)?,
            other => fill_string_nulls(series, &other.to_string())?,
        };
        Ok(Some(filled))
    })?;

    debug!("fixed: filled nulls with '{}'", value);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixtures::*;
    use crate::utils::total_null_count;

    #[test]
    fn test_replace_with_fixed_numeric_default() {
        let df = numeric_nulls();
        let out = replace_with_fixed(&df, &FillValue::default()).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert_eq!(out.shape(), df.shape());
        assert_eq!(f64_at(&out, "A", 2), Some(0.0));
        assert_eq!(f64_at(&out, "B", 0), Some(0.0));
        assert_eq!(f64_at(&out, "C", 4), Some(0.0));
        // Integer column stays integral
        assert_eq!(out.column("A").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_replace_with_fixed_numeric_custom_value() {
        let out = replace_with_fixed(&numeric_nulls(), &FillValue::Int(-99)).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert_eq!(f64_at(&out, "A", 2), Some(-99.0));
        assert_eq!(f64_at(&out, "C", 4), Some(-99.0));
    }

    #[test]
    fn test_replace_with_fixed_categorical_default() {
        let out = replace_with_fixed(&categorical_nulls(), &FillValue::default()).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert_eq!(str_at(&out, "X", 2).as_deref(), Some("0"));
        assert_eq!(str_at(&out, "Y", 4).as_deref(), Some("0"));
        assert_eq!(str_at(&out, "Y", 1).as_deref(), Some("cat"));
    }

    #[test]
    fn test_replace_with_fixed_text_into_numeric_column() {
        let out = replace_with_fixed(&mixed_nulls(), &FillValue::from("MISSING")).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert_eq!(out.column("NumCol").unwrap().dtype(), &DataType::String);
        assert_eq!(str_at(&out, "NumCol", 1).as_deref(), Some("MISSING"));
        let kept = str_at(&out, "NumCol", 0).unwrap();
        assert_eq!(kept.parse::<f64>().unwrap(), 1.0);
        // Columns without nulls keep their type
        assert_eq!(out.column("FullNumCol").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn test_replace_with_fixed_float_into_integer_column() {
        let out = replace_with_fixed(&numeric_nulls(), &FillValue::Float(0.5)).unwrap();

        assert_eq!(out.column("A").unwrap().dtype(), &DataType::Float64);
        assert_eq!(f64_at(&out, "A", 2), Some(0.5));
    }

    #[test]
    fn test_replace_with_fixed_all_null_col() {
        let df = all_null_col();
        let out = replace_with_fixed(&df, &FillValue::Int(-1)).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert_eq!(out.shape(), df.shape());
        for idx in 0..out.height() {
            assert_eq!(f64_at(&out, "B", idx), Some(-1.0));
        }
    }

    #[test]
    fn test_replace_with_fixed_all_null_df() {
        let df = all_null_df();
        let out = replace_with_fixed(&df, &FillValue::from("N/A")).unwrap();

        assert_eq!(total_null_count(&out), 0);
        for col in ["A", "B"] {
            for idx in 0..out.height() {
                assert_eq!(str_at(&out, col, idx).as_deref(), Some("N/A"));
            }
        }
    }

    #[test]
    fn test_replace_with_fixed_empty_df() {
        let out = replace_with_fixed(&DataFrame::empty(), &FillValue::Int(123)).unwrap();
        assert_eq!(out.shape(), (0, 0));
    }

    #[test]
    fn test_replace_with_fixed_no_nulls() {
        let df = no_nulls();
        let out = replace_with_fixed(&df, &FillValue::Int(999)).unwrap();
        assert!(out.equals_missing(&df));
    }
}
