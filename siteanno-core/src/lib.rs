//! Core library for siteanno: shared models and parsing.
//!
//! Provides the `Region`/`RegionSet` representation of BED annotation files,
//! the `AnnotationTable` result model, and small utilities shared by the
//! store and annotation crates.

pub mod errors;
pub mod models;
pub mod utils;

pub use errors::RegionSetError;
