//! Error types for sales data ingestion.

use std::path::PathBuf;
use thiserror::Error;

use crate::loader::ReadStrategy;

/// Errors that can occur while loading the raw sales file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Every strict strategy and the lenient fallback failed.
    #[error(
        "unable to read CSV '{path}': {lenient}. Last attempt error ({last_strategy}): {last_strict}"
    )]
    Unreadable {
        path: PathBuf,
        lenient: Box<AttemptError>,
        last_strategy: ReadStrategy,
        last_strict: Box<AttemptError>,
    },
}

/// Why a single parse attempt was rejected.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// Bytes are not valid in the strategy's encoding.
    #[error("input is not valid {encoding}")]
    Decode { encoding: &'static str },

    /// A single column came back whose header still holds another delimiter.
    #[error("header contains '{found}', delimiter mismatch")]
    DelimiterMismatch { found: char },

    /// No header record could be found.
    #[error("no header row")]
    NoHeader,

    /// Polars rejected the input.
    #[error("{0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Record-level tokenizer failure in lenient mode.
    #[error("{0}")]
    Csv(#[from] ::csv::Error),

    /// Re-encoding the retained records failed.
    #[error("failed to buffer retained rows: {0}")]
    Buffer(#[from] std::io::Error),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
