//! Sales table transformation crate.
//!
//! Stateless stages that reshape a loaded sales table in place:
//! - **Columns**: canonical lowercase, underscore-delimited labels and legacy renames
//! - **Text**: whitespace trimming and quote stripping on designated columns
//! - **Validation**: completeness and numeric validity filters for required fields
//!
//! Bad data never raises an error here; offending rows are dropped and the
//! filters report how many.
//!
//! # Example
//!
//! ```ignore
//! use sales_transform::{CleaningOptions, drop_invalid_numeric, drop_missing_required};
//!
//! let options = CleaningOptions::default();
//! drop_missing_required(&mut df, &options.required_fields)?;
//! let outcome = drop_invalid_numeric(&mut df, &options.required_fields)?;
//! println!("dropped {} rows", outcome.dropped());
//! ```

mod columns;
mod error;
mod frame;
mod numeric;
mod options;
mod text;
mod validate;

// Error type
pub use error::{Result, TransformError};

// Configuration
pub use options::CleaningOptions;

// Column labels
pub use columns::{normalize_column_name, normalize_column_names, rename_legacy_columns};

// Text cleanup
pub use text::{strip_all_quotes, strip_quotes, strip_whitespace};

// Validation
pub use numeric::{any_to_f64, coerce_numeric_column, parse_numeric};
pub use validate::{FilterOutcome, drop_invalid_numeric, drop_missing_required};
