//! Forward and backward fill.
//!
//! Each column is filled independently. Nulls with no neighbouring value in
//! the fill direction (leading nulls for forward fill, trailing nulls for
//! backward fill, whole all-null columns) stay null.

use super::fill_null_columns;
use crate::error::Result;
use crate::utils::is_all_null;
use polars::prelude::*;
use tracing::debug;

/// Propagate the most recent value forward into following nulls.
pub fn forward_fill(df: &DataFrame) -> Result<DataFrame> {
    propagate(df, FillNullStrategy::Forward(None), "ffill")
}

/// Propagate the next value backward into preceding nulls.
pub fn backward_fill(df: &DataFrame) -> Result<DataFrame> {
    propagate(df, FillNullStrategy::Backward(None), "bfill")
}

fn propagate(df: &DataFrame, strategy: FillNullStrategy, label: &str) -> Result<DataFrame> {
    let out = fill_null_columns(df, |series| {
        if is_all_null(series) {
            return Ok(None);
        }
        let filled = series.fill_null(strategy.clone())?;
        debug!(
            "{}: '{}' nulls {} -> {}",
            label,
            series.name(),
            series.null_count(),
            filled.null_count()
        );
        Ok(Some(filled))
    })?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::fixtures::*;
    use crate::utils::total_null_count;

    // ========================================================================
    // forward_fill() tests
    // ========================================================================

    #[test]
    fn test_forward_fill_basic() {
        let df = mixed_nulls();
        let out = forward_fill(&df).unwrap();

        assert_eq!(out.shape(), df.shape());
        // NumCol: [1, null, 3, 4, null] -> [1, 1, 3, 4, 4]
        assert_eq!(f64_at(&out, "NumCol", 1), Some(1.0));
        assert_eq!(f64_at(&out, "NumCol", 4), Some(4.0));
        // CatCol: [a, b, null, d, a] -> [a, b, b, d, a]
        assert_eq!(str_at(&out, "CatCol", 2).as_deref(), Some("b"));
        assert_eq!(total_null_count(&out), 0);
    }

    #[test]
    fn test_forward_fill_leading_nulls() {
        let df = df![
            "A" => [None, None, Some(1.0), Some(2.0), None, Some(3.0)],
            "B" => [None, Some("x"), Some("y"), None, None, Some("z")],
        ]
        .unwrap();
        let out = forward_fill(&df).unwrap();

        assert_eq!(nulls_in(&out, "A"), 2);
        assert_eq!(nulls_in(&out, "B"), 1);
        assert_eq!(f64_at(&out, "A", 4), Some(2.0));
        assert_eq!(str_at(&out, "B", 3).as_deref(), Some("y"));
        assert_eq!(str_at(&out, "B", 4).as_deref(), Some("y"));
    }

    #[test]
    fn test_forward_fill_all_null() {
        let df = all_null_col();
        let out = forward_fill(&df).unwrap();
        assert_eq!(nulls_in(&out, "B"), 5);
        assert!(out.equals_missing(&df));

        let df = all_null_df();
        assert!(forward_fill(&df).unwrap().equals_missing(&df));
    }

    #[test]
    fn test_forward_fill_empty_and_no_nulls() {
        assert_eq!(forward_fill(&DataFrame::empty()).unwrap().shape(), (0, 0));

        let df = no_nulls();
        assert!(forward_fill(&df).unwrap().equals_missing(&df));
    }

    // ========================================================================
    // backward_fill() tests
    // ========================================================================

    #[test]
    fn test_backward_fill_basic() {
        let df = mixed_nulls();
        let out = backward_fill(&df).unwrap();

        // NumCol: [1, null, 3, 4, null] -> [1, 3, 3, 4, null]
        assert_eq!(f64_at(&out, "NumCol", 1), Some(3.0));
        assert_eq!(f64_at(&out, "NumCol", 4), None);
        // CatCol: [a, b, null, d, a] -> [a, b, d, d, a]
        assert_eq!(str_at(&out, "CatCol", 2).as_deref(), Some("d"));
        assert_eq!(total_null_count(&out), 1);
    }

    #[test]
    fn test_backward_fill_trailing_nulls() {
        let df = df![
            "A" => [None, Some(1.0), None, Some(2.0), Some(3.0), None, None],
            "B" => [Some("x"), None, Some("y"), Some("z"), None, None, None],
        ]
        .unwrap();
        let out = backward_fill(&df).unwrap();

        assert_eq!(nulls_in(&out, "A"), 2);
        assert_eq!(nulls_in(&out, "B"), 3);
        assert_eq!(f64_at(&out, "A", 0), Some(1.0));
        assert_eq!(f64_at(&out, "A", 2), Some(2.0));
        assert_eq!(str_at(&out, "B", 1).as_deref(), Some("y"));
    }

    #[test]
    fn test_backward_fill_all_null() {
        let df = all_null_col();
        let out = backward_fill(&df).unwrap();
        assert_eq!(nulls_in(&out, "B"), 5);

        let df = all_null_df();
        assert!(backward_fill(&df).unwrap().equals_missing(&df));
    }

    #[test]
    fn test_backward_fill_empty_and_no_nulls() {
        assert_eq!(backward_fill(&DataFrame::empty()).unwrap().shape(), (0, 0));

        let df = no_nulls();
        assert!(backward_fill(&df).unwrap().equals_missing(&df));
    }
}
