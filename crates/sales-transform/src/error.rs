//! Error types for table transformations.

use thiserror::Error;

/// Errors raised while reshaping a sales table.
///
/// Data-quality problems never surface here; bad rows are dropped instead.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("price".into());
        let err: TransformError = polars_err.into();
        assert!(matches!(err, TransformError::DataFrame { .. }));
        assert!(err.to_string().contains("price"));
    }
}
