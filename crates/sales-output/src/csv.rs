//! Cleaned CSV output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tempfile::NamedTempFile;
use tracing::info;

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    Ok(())
}

/// Write the cleaned table as comma-separated UTF-8 with a header row.
///
/// The data is staged in a temporary file next to the destination and moved
/// over it once complete, so an existing file is only replaced by a fully
/// written one.
pub fn write_clean_csv(df: &mut DataFrame, path: &Path) -> Result<PathBuf> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;
    CsvWriter::new(staged.as_file_mut())
        .include_header(true)
        .with_separator(b',')
        .finish(df)
        .with_context(|| format!("write CSV rows for {}", path.display()))?;
    staged
        .as_file()
        .sync_all()
        .with_context(|| format!("flush {}", path.display()))?;
    staged
        .persist(path)
        .with_context(|| format!("replace {}", path.display()))?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote cleaned CSV"
    );
    Ok(path.to_path_buf())
}
