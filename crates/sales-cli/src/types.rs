use std::path::PathBuf;

use polars::prelude::DataFrame;
use sales_ingest::ReadStrategy;
use sales_transform::FilterOutcome;

/// Row counts and label changes from the in-memory cleaning stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSummary {
    /// Normalized labels that more than one source column mapped to.
    pub collisions: Vec<String>,
    /// Legacy labels renamed to their canonical names.
    pub renamed: usize,
    pub completeness: FilterOutcome,
    pub validity: FilterOutcome,
}

#[derive(Debug)]
pub struct CleanResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub strategy: ReadStrategy,
    /// Malformed rows discarded by the lenient parser.
    pub discarded_rows: usize,
    pub loaded_rows: usize,
    pub summary: CleanSummary,
    /// First rows of the written table.
    pub preview: DataFrame,
}

impl CleanResult {
    pub fn output_rows(&self) -> usize {
        self.summary.validity.after
    }
}
