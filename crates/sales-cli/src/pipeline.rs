//! Sales cleaning pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load**: Parse the raw file through the strategy ladder
//! 2. **Normalize**: Canonical column labels, legacy renames, quote and whitespace cleanup
//! 3. **Validate**: Drop incomplete rows, then rows with non-numeric or negative values
//! 4. **Output**: Write the cleaned CSV
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use sales_ingest::{LoadedTable, load_sales_table};
use sales_output::write_clean_csv;
use sales_transform::{
    CleaningOptions, FilterOutcome, drop_invalid_numeric, drop_missing_required,
    normalize_column_names, rename_legacy_columns, strip_quotes, strip_whitespace,
};

use crate::types::{CleanResult, CleanSummary};

/// Inputs for one cleaning run.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub preview_rows: usize,
    pub options: CleaningOptions,
}

impl CleanConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            preview_rows: 5,
            options: CleaningOptions::default(),
        }
    }

    #[must_use]
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }
}

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Parse the raw input file.
pub fn load(path: &Path) -> Result<LoadedTable> {
    let start = Instant::now();
    let loaded =
        load_sales_table(path).with_context(|| format!("load {}", path.display()))?;
    info!(
        strategy = %loaded.strategy,
        rows = loaded.frame.height(),
        discarded_rows = loaded.discarded_rows,
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(loaded)
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Column labels and text cells, in that order.
///
/// Returns the label collisions and how many legacy renames were applied.
pub fn normalize(df: &mut DataFrame, options: &CleaningOptions) -> Result<(Vec<String>, usize)> {
    let collisions = normalize_column_names(df).context("normalize column names")?;
    let renamed =
        rename_legacy_columns(df, &options.legacy_renames).context("rename legacy columns")?;
    if let Some(column) = &options.quote_column {
        strip_quotes(df, column).with_context(|| format!("strip quotes from {column}"))?;
    }
    strip_whitespace(df, &options.text_columns).context("trim text columns")?;
    info!(
        columns = df.width(),
        collisions = collisions.len(),
        renamed,
        "normalize complete"
    );
    Ok((collisions, renamed))
}

// ============================================================================
// Stage 3: Validate
// ============================================================================

/// Completeness filter followed by the numeric validity filter.
pub fn validate(
    df: &mut DataFrame,
    options: &CleaningOptions,
) -> Result<(FilterOutcome, FilterOutcome)> {
    let completeness = drop_missing_required(df, &options.required_fields)
        .context("drop rows with missing required fields")?;
    let validity = drop_invalid_numeric(df, &options.required_fields)
        .context("drop rows with invalid numbers")?;
    info!(
        missing_dropped = completeness.dropped(),
        invalid_dropped = validity.dropped(),
        rows = df.height(),
        "validate complete"
    );
    Ok((completeness, validity))
}

/// Run the in-memory stages (normalize and validate) on a loaded frame.
pub fn clean_frame(df: &mut DataFrame, options: &CleaningOptions) -> Result<CleanSummary> {
    let (collisions, renamed) = normalize(df, options)?;
    let (completeness, validity) = validate(df, options)?;
    Ok(CleanSummary {
        collisions,
        renamed,
        completeness,
        validity,
    })
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the cleaned frame.
pub fn output(df: &mut DataFrame, path: &Path) -> Result<PathBuf> {
    let start = Instant::now();
    let written = write_clean_csv(df, path)?;
    info!(
        path = %written.display(),
        duration_ms = start.elapsed().as_millis(),
        "output complete"
    );
    Ok(written)
}

/// Load, clean and write one file.
pub fn run_clean(config: &CleanConfig) -> Result<CleanResult> {
    let span = info_span!(
        "clean",
        input = %config.input.display(),
        output = %config.output.display()
    );
    let _guard = span.enter();

    let LoadedTable {
        frame: mut df,
        strategy,
        discarded_rows,
    } = load(&config.input)?;
    let loaded_rows = df.height();

    let summary = clean_frame(&mut df, &config.options)?;
    let output_path = output(&mut df, &config.output)?;

    Ok(CleanResult {
        input_path: config.input.clone(),
        output_path,
        strategy,
        discarded_rows,
        loaded_rows,
        summary,
        preview: df.head(Some(config.preview_rows)),
    })
}
