use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::RegionSetError;
use crate::models::Region;
use crate::utils::get_dynamic_reader;

///
/// RegionSet struct, the representation of an interval annotation file,
/// such as a bed file.
///
#[derive(Clone, Debug)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for RegionSet {
    type Error = RegionSetError;

    ///
    /// Create a new [RegionSet] from a bed file (plain or gzipped).
    ///
    /// # Arguments:
    /// - value: path to bed file on disk.
    fn try_from(value: &Path) -> Result<Self, RegionSetError> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| RegionSetError::FileReadError(format!("{}: {}", value.display(), e)))?;

        let mut new_regions: Vec<Region> = Vec::new();
        let mut header: String = String::new();
        let mut first_line: bool = true;

        for line in reader.lines() {
            let string_line = line?;

            if string_line.starts_with("browser")
                || string_line.starts_with("track")
                || string_line.starts_with("#")
            {
                header.push_str(&string_line);
                first_line = false;
                continue;
            }

            let parts: Vec<&str> = string_line.split('\t').collect();
            if parts.len() < 3 {
                return Err(RegionSetError::RegionParseError(format!(
                    "Expected at least 3 tab-separated fields: {:?}",
                    string_line
                )));
            }

            // Handling column headers like `chr start end` without #
            if first_line {
                first_line = false;
                if parts[1].parse::<u32>().is_err() {
                    header.push_str(&string_line);
                    continue;
                }
            }

            let start = parts[1].parse().map_err(|_| {
                RegionSetError::RegionParseError(format!(
                    "Error in parsing start position: {:?}",
                    parts
                ))
            })?;
            let end = parts[2].parse().map_err(|_| {
                RegionSetError::RegionParseError(format!(
                    "Error in parsing end position: {:?}",
                    parts
                ))
            })?;

            new_regions.push(Region {
                chr: parts[0].to_owned(),
                start,
                end,
            });
        }

        if new_regions.is_empty() {
            return Err(RegionSetError::EmptyRegionSet(
                value.display().to_string(),
            ));
        }

        Ok(RegionSet {
            regions: new_regions,
            header: if header.is_empty() {
                None
            } else {
                Some(header)
            },
            path: Some(value.into()),
        })
    }
}

impl TryFrom<&str> for RegionSet {
    type Error = RegionSetError;

    fn try_from(value: &str) -> Result<Self, RegionSetError> {
        RegionSet::try_from(Path::new(value))
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet {
            regions,
            header: None,
            path: None,
        }
    }
}

impl RegionSet {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    ///
    /// All regions lying on the given chromosome. Chromosome names are
    /// compared with the `chr` prefix stripped on both sides.
    ///
    pub fn filter_chrom(&self, chromo: &str) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|r| r.on_chrom(chromo))
            .collect()
    }
}
