//! Row removal.

use crate::error::Result;
use polars::prelude::*;
use tracing::debug;

/// Remove every row that holds at least one null in any column.
///
/// Columns are always kept, so an all-null column empties the table while
/// leaving its column count intact.
pub fn drop_nulls(df: &DataFrame) -> Result<DataFrame> {
    if df.width() == 0 || df.height() == 0 {
        return Ok(df.clone());
    }

    let mut keep = BooleanChunked::full("keep".into(), true, df.height());
    for col in df.get_columns() {
        if col.null_count() == 0 {
            continue;
        }
        let present = col.as_materialized_series().is_not_null();
        keep = &keep & &present;
    }

    let out = df.filter(&keep)?;
    debug!(
        "drop: removed {} of {} rows",
        df.height() - out.height(),
        df.height()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixtures::*;
    use crate::utils::total_null_count;

    #[test]
    fn test_drop_nulls_numeric() {
        let df = numeric_nulls();
        let out = drop_nulls(&df).unwrap();

        assert_eq!(total_null_count(&out), 0);
        // Rows 0, 2 and 4 each hold a null
        assert_eq!(out.height(), 2);
        assert_eq!(f64_at(&out, "A", 0), Some(2.0));
        assert_eq!(f64_at(&out, "A", 1), Some(4.0));
    }

    #[test]
    fn test_drop_nulls_categorical() {
        let out = drop_nulls(&categorical_nulls()).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert_eq!(out.height(), 2);
        assert_eq!(str_at(&out, "Z", 0).as_deref(), Some("two"));
        assert_eq!(str_at(&out, "Z", 1).as_deref(), Some("four"));
    }

    #[test]
    fn test_drop_nulls_mixed() {
        let df = mixed_nulls();
        let out = drop_nulls(&df).unwrap();

        assert_eq!(total_null_count(&out), 0);
        assert!(out.height() < df.height());
        assert_eq!(out.width(), df.width());
    }

    #[test]
    fn test_drop_nulls_all_null_col() {
        let df = all_null_col();
        let out = drop_nulls(&df).unwrap();

        assert_eq!(out.height(), 0);
        assert_eq!(out.width(), df.width());
    }

    #[test]
    fn test_drop_nulls_all_null_df() {
        let df = all_null_df();
        let out = drop_nulls(&df).unwrap();

        assert_eq!(out.height(), 0);
        assert_eq!(out.width(), 2);
    }

    #[test]
    fn test_drop_nulls_empty_df() {
        let df = DataFrame::empty();
        let out = drop_nulls(&df).unwrap();

        assert_eq!(out.shape(), (0, 0));
    }

    #[test]
    fn test_drop_nulls_no_nulls() {
        let df = no_nulls();
        let out = drop_nulls(&df).unwrap();

        assert_eq!(out.shape(), df.shape());
        assert!(out.equals_missing(&df));
    }
}
