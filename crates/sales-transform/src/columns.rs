//! Column label normalization.

use polars::prelude::{Column, DataFrame};
use tracing::{debug, warn};

use crate::error::Result;
use crate::frame::has_column;

/// Canonical form of a column label.
///
/// Surrounding whitespace is removed, the label is lowercased, and every space
/// and hyphen becomes an underscore.
///
/// # Examples
///
/// ```
/// use sales_transform::normalize_column_name;
///
/// assert_eq!(normalize_column_name("Product Name "), "product_name");
/// assert_eq!(normalize_column_name("Unit-Price"), "unit_price");
/// assert_eq!(normalize_column_name("qty"), "qty");
/// ```
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Rewrite every column label to its canonical form.
///
/// When several labels normalize to the same name the last column wins and
/// the earlier ones are dropped. Returns the names that collided.
pub fn normalize_column_names(df: &mut DataFrame) -> Result<Vec<String>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| normalize_column_name(name.as_str()))
        .collect();

    let mut collisions = Vec::new();
    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for (idx, (column, name)) in df.get_columns().iter().zip(&names).enumerate() {
        if names[idx + 1..].contains(name) {
            if !collisions.contains(name) {
                warn!(
                    column = %name,
                    source = %column.name(),
                    "column labels collide after normalization, keeping the last one"
                );
                collisions.push(name.clone());
            }
            continue;
        }
        columns.push(column.clone().with_name(name.as_str().into()));
    }

    *df = DataFrame::new(columns)?;
    debug!(columns = ?names, "normalized column names");
    Ok(collisions)
}

/// Rename legacy labels to their canonical names.
///
/// A legacy column replaces any existing column that already carries the
/// target name. Returns how many renames were applied.
pub fn rename_legacy_columns(df: &mut DataFrame, renames: &[(String, String)]) -> Result<usize> {
    let mut applied = 0usize;
    for (old, new) in renames {
        if old == new || !has_column(df, old) {
            continue;
        }
        if has_column(df, new) {
            warn!(
                legacy = %old,
                target = %new,
                "target column already present, replacing it with the legacy column"
            );
            df.drop_in_place(new)?;
        }
        df.rename(old, new.as_str().into())?;
        applied += 1;
    }
    Ok(applied)
}
