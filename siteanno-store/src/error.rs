use std::io;

use thiserror::Error;

/// Error type for siteanno-store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error raised by the Parquet reader or writer.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Error raised while building Arrow record batches.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Dataset reference is not of the form `path:dataset_group`.
    #[error("Invalid dataset reference (expected `path:dataset_group`): {0}")]
    InvalidDatasetRef(String),

    /// The dataset has no position table for the requested chromosome.
    #[error("No position table for chromosome {chromo} in dataset {dataset}")]
    MissingChromosome { dataset: String, chromo: String },

    /// The dataset group has no position tables at all.
    #[error("No position tables found under dataset group: {0}")]
    EmptyDataset(String),

    /// A table is missing an expected column.
    #[error("Missing column {0} in table")]
    MissingColumn(String),

    /// A column has an unexpected type or unexpected nulls.
    #[error("Invalid column {0} in table: {1}")]
    InvalidColumn(String, String),
}

/// Result type alias for siteanno-store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
