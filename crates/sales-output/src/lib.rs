//! Output generation for cleaned sales tables.

mod csv;

pub use csv::{ensure_parent_dir, write_clean_csv};
