//! Text cell cleanup.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;
use crate::frame::{has_column, opt_string_column, set_opt_string_column};

/// Remove every double quote from a value, then trim surrounding whitespace.
///
/// # Examples
///
/// ```
/// use sales_transform::strip_all_quotes;
///
/// assert_eq!(strip_all_quotes("\"Electronics\" "), "Electronics");
/// assert_eq!(strip_all_quotes("Home \"& Garden\""), "Home & Garden");
/// assert_eq!(strip_all_quotes("unquoted"), "unquoted");
/// ```
pub fn strip_all_quotes(value: &str) -> String {
    if !value.contains('"') {
        return value.trim().to_string();
    }
    value
        .chars()
        .filter(|ch| *ch != '"')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trim surrounding whitespace from every cell of the listed columns.
///
/// Cells are replaced by their text form; nulls stay null. Columns missing
/// from the frame are skipped. Returns how many columns were rewritten.
pub fn strip_whitespace<S: AsRef<str>>(df: &mut DataFrame, columns: &[S]) -> Result<usize> {
    let mut touched = 0usize;
    for name in columns {
        let name = name.as_ref();
        if !has_column(df, name) {
            continue;
        }
        let values = opt_string_column(df, name)?
            .into_iter()
            .map(|value| value.map(|text| text.trim().to_string()))
            .collect();
        set_opt_string_column(df, name, values)?;
        touched += 1;
    }
    debug!(columns = touched, "trimmed text columns");
    Ok(touched)
}

/// Strip double quotes from one column, trimming afterwards.
///
/// Returns false when the column is absent.
pub fn strip_quotes(df: &mut DataFrame, column: &str) -> Result<bool> {
    if !has_column(df, column) {
        return Ok(false);
    }
    let values = opt_string_column(df, column)?
        .into_iter()
        .map(|value| value.map(|text| strip_all_quotes(&text)))
        .collect();
    set_opt_string_column(df, column, values)?;
    Ok(true)
}
