use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the batch processor and its table collaborators.
///
/// Content violations are never errors; they travel with the generated row.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("duplicate column '{0}' in input header")]
    DuplicateColumn(String),
    #[error("missing required field '{field}' in row {row}")]
    MissingField { row: usize, field: String },
    #[error("policy error: {0}")]
    Policy(#[from] listcraft_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
