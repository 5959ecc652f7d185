//! Small DataFrame helpers shared by the transformation stages.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use sales_ingest::any_to_opt_string;

use crate::error::Result;

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Cells of a column as text, with nulls preserved.
pub fn opt_string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_opt_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Replace (or append) a text column, keeping its position.
pub fn set_opt_string_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_f64_column(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn set_i64_column(df: &mut DataFrame, name: &str, values: Vec<Option<i64>>) -> Result<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

pub fn filter_rows(df: &mut DataFrame, keep: &[bool]) -> Result<()> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    *df = df.filter(&mask)?;
    Ok(())
}
