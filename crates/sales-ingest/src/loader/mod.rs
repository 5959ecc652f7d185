//! Raw file loading.

mod reader;
mod strategy;

pub use reader::{LoadedTable, NULL_MARKERS, load_sales_table};
pub use strategy::{ReadStrategy, TextEncoding};
