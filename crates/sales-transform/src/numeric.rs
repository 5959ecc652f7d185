//! Numeric coercion for required fields.

use polars::prelude::{AnyValue, DataFrame};

use crate::error::Result;
use crate::frame::{set_f64_column, set_i64_column};

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse a string value to numeric (f64).
///
/// Handles common numeric formats:
/// - Standard numbers: "123", "-45.67", "+3", ".5"
/// - Whitespace: "  123  "
/// - Scientific notation: "1.23e5"
/// - Special values: "inf", "-inf", "nan"
///
/// Thousands separators are not accepted. Returns None if the value cannot be
/// parsed as a number.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse().ok()
}

/// Numeric value of a cell, `None` for nulls and unparseable text.
pub fn any_to_f64(value: AnyValue) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float64(v) => Some(v),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::String(s) => parse_numeric(s),
        AnyValue::StringOwned(s) => parse_numeric(&s),
        _ => None,
    }
}

fn is_exact_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER
}

/// Coerce a column to numeric in place.
///
/// Values that cannot be parsed become null. The column is stored as `Int64`
/// when every parsed value is integral, otherwise as `Float64`. Returns the
/// coerced values together with how many non-null cells failed to parse.
pub fn coerce_numeric_column(df: &mut DataFrame, name: &str) -> Result<(Vec<Option<f64>>, usize)> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    let mut failures = 0usize;
    for idx in 0..df.height() {
        let cell = column.get(idx).unwrap_or(AnyValue::Null);
        let was_null = matches!(cell, AnyValue::Null);
        let parsed = any_to_f64(cell);
        if parsed.is_none() && !was_null {
            failures += 1;
        }
        values.push(parsed);
    }

    if values.iter().flatten().all(|v| is_exact_integer(*v)) {
        let integers = values.iter().map(|v| v.map(|v| v as i64)).collect();
        set_i64_column(df, name, integers)?;
    } else {
        set_f64_column(df, name, values.clone())?;
    }
    Ok((values, failures))
}
