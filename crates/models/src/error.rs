//! Error types for the models crate.

use thiserror::Error;

/// Errors that can occur when running a fitted artifact against an input
#[derive(Error, Debug)]
pub enum ModelError {
    /// The input frame's column doesn't match the column the encoder was fitted on
    #[error("column mismatch: encoder was fitted on '{expected}', got '{found}'")]
    ColumnMismatch { expected: String, found: String },

    /// The label is not in the encoder's fitted vocabulary
    #[error("no encoding for label '{0}'")]
    UnknownLabel(String),

    /// The encoded index falls outside the predictor's output table
    #[error("encoded index {index} out of range for {rows} output rows")]
    IndexOutOfRange { index: usize, rows: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
