//! # Input/Output for the siteanno position dataset.
//!
//! A dataset is a directory tree of Parquet tables: per-chromosome position
//! tables live under `<root>/<dataset>/pos/`, and annotation result tables
//! are written back under `<root>/<dataset>/annos[_dist]/<anno_name>/`.
//!
pub mod consts;
pub mod dataset;
pub mod error;

// re-expose core functions
pub use consts::*;
pub use dataset::*;
pub use error::*;
