//! Raw sales data ingestion.
//!
//! Loads a loosely-structured sales export into a Polars DataFrame. Files may
//! be comma or semicolon delimited, UTF-8 or Latin-1 encoded, and may contain
//! rows whose field count disagrees with the header.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sales_ingest::{ReadStrategy, load_sales_table};
//!
//! let loaded = load_sales_table(Path::new("data/raw/sales_data_raw.csv"))?;
//! if loaded.strategy == ReadStrategy::Lenient {
//!     eprintln!("dropped {} malformed rows", loaded.discarded_rows);
//! }
//! ```

mod error;
mod loader;
mod value;

// === Error Types ===
pub use error::{AttemptError, IngestError, Result};

// === Loading ===
pub use loader::{LoadedTable, NULL_MARKERS, ReadStrategy, TextEncoding, load_sales_table};

// === Value Helpers ===
pub use value::{any_to_opt_string, any_to_string};
