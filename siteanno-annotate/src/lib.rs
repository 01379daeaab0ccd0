//! Overlap and distance annotation for genomic position datasets.
//!
//! This crate provides the interval algebra used to annotate per-chromosome
//! position tables with BED-derived features:
//!
//! - Merging overlapping annotation intervals into a minimal disjoint set
//! - Boolean membership (is a position inside any annotated interval)
//! - Distance to the nearest annotated interval edge
//!
//! The [`Processor`] ties these together: it walks every chromosome of a
//! position dataset and writes one result table per (annotation, chromosome)
//! pair back into the store.

pub mod features;
pub mod processor;
pub mod ranges;

// re-exports
pub use features::{distance, is_in};
pub use processor::Processor;
pub use ranges::merge_overlapping;

use siteanno_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
