/// Directory under the dataset group holding per-chromosome position tables.
pub const POS_DIR: &str = "pos";

/// Column name for genomic positions.
pub const POS_COLUMN: &str = "pos";

/// Column name for annotation values.
pub const VALUE_COLUMN: &str = "value";

/// File extension of the tables making up a dataset.
pub const TABLE_EXT: &str = "parquet";

/// Separator between the store path and the dataset group in a dataset
/// reference like `data/store:train`.
pub const DATASET_REF_SEPARATOR: char = ':';
