use std::fmt::{self, Display};

use crate::utils::normalize_chrom;

///
/// Region struct, representation of one interval in a BED annotation file.
/// Coordinates are 0-based half-open `[start, end)`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Region {
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Check whether this region lies on the given chromosome, comparing
    /// names with the leading `chr` prefix stripped on both sides.
    ///
    pub fn on_chrom(&self, chromo: &str) -> bool {
        normalize_chrom(&self.chr) == normalize_chrom(chromo)
    }

    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
