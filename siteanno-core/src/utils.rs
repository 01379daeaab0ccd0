use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Normalize a chromosome name by stripping a leading `chr` prefix,
/// so BED `chr1` and dataset chromosome `1` refer to the same sequence.
///
pub fn normalize_chrom(chromo: &str) -> &str {
    chromo
        .strip_prefix("chr")
        .or_else(|| chromo.strip_prefix("Chr"))
        .unwrap_or(chromo)
}

///
/// File stem with every extension removed, so `cgi.bed.gz` yields `cgi`.
/// Used to derive annotation names from annotation file paths.
///
pub fn remove_all_extensions(path: &Path) -> String {
    // Paths without a file stem (empty string, `/`) fall back to the path
    // itself; the caller's file open reports the real problem.
    let Some(stem) = path.file_stem() else {
        return path.to_string_lossy().to_string();
    };
    let mut stem = stem.to_string_lossy().to_string();

    let mut parent_path = path.with_file_name(stem.clone());
    while let Some(_extension) = parent_path.extension() {
        parent_path = parent_path.with_extension("");
        stem = match parent_path.file_stem() {
            Some(s) => s.to_string_lossy().to_string(),
            None => break,
        };
    }

    stem
}
