//! Row filters for required numeric fields.

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use crate::error::Result;
use crate::frame::{filter_rows, has_column};
use crate::numeric::coerce_numeric_column;

/// Row counts around a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOutcome {
    pub before: usize,
    pub after: usize,
}

impl FilterOutcome {
    fn unchanged(rows: usize) -> Self {
        Self {
            before: rows,
            after: rows,
        }
    }

    /// Rows removed by the filter.
    pub fn dropped(&self) -> usize {
        self.before - self.after
    }
}

/// Drop rows holding a null in any required field that exists as a column.
///
/// Required fields that are not columns are ignored; when none exists the
/// frame is left untouched.
pub fn drop_missing_required<S: AsRef<str>>(
    df: &mut DataFrame,
    required: &[S],
) -> Result<FilterOutcome> {
    let before = df.height();
    let present: Vec<&str> = required
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| has_column(df, name))
        .collect();
    if present.is_empty() {
        return Ok(FilterOutcome::unchanged(before));
    }

    let mut keep = vec![true; before];
    for name in &present {
        let column = df.column(name)?;
        for (idx, slot) in keep.iter_mut().enumerate() {
            if matches!(column.get(idx).unwrap_or(AnyValue::Null), AnyValue::Null) {
                *slot = false;
            }
        }
    }
    filter_rows(df, &keep)?;

    let outcome = FilterOutcome {
        before,
        after: df.height(),
    };
    debug!(fields = ?present, dropped = outcome.dropped(), "dropped incomplete rows");
    Ok(outcome)
}

/// Coerce required fields to numbers and keep rows where all are `>= 0`.
///
/// Runs only when every required field exists. Unparseable values become null
/// and, like NaN, fail the comparison, so their rows are dropped.
pub fn drop_invalid_numeric<S: AsRef<str>>(
    df: &mut DataFrame,
    required: &[S],
) -> Result<FilterOutcome> {
    let before = df.height();
    if required.is_empty() || !required.iter().all(|name| has_column(df, name.as_ref())) {
        return Ok(FilterOutcome::unchanged(before));
    }

    let mut keep = vec![true; before];
    for name in required {
        let name = name.as_ref();
        let (values, failures) = coerce_numeric_column(df, name)?;
        if failures > 0 {
            debug!(field = name, failures, "values could not be coerced to numbers");
        }
        for (slot, value) in keep.iter_mut().zip(values) {
            if !matches!(value, Some(v) if v >= 0.0) {
                *slot = false;
            }
        }
    }
    filter_rows(df, &keep)?;

    let outcome = FilterOutcome {
        before,
        after: df.height(),
    };
    debug!(dropped = outcome.dropped(), "dropped rows with invalid numbers");
    Ok(outcome)
}
