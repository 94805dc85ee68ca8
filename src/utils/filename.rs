use crate::utils::constants::{CSV_EXTENSION, MEAN_SUFFIX, STDEV_SUFFIX};
use std::path::{Path, PathBuf};

/// Derive `{dir}/{input stem}{suffix}.csv`; `dir` defaults to the input's directory
pub fn derive_output_path(input: &Path, suffix: &str, dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "grid".to_string());

    let filename = format!("{}{}.{}", stem, suffix, CSV_EXTENSION);
    match dir {
        Some(dir) => dir.join(filename),
        None => input.with_file_name(filename),
    }
}

/// Output locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub values: PathBuf,
    pub mean: PathBuf,
    pub stdev: PathBuf,
}

impl OutputPaths {
    pub fn for_input(input: &Path, dir: Option<&Path>) -> Self {
        Self {
            values: derive_output_path(input, "", dir),
            mean: derive_output_path(input, MEAN_SUFFIX, dir),
            stdev: derive_output_path(input, STDEV_SUFFIX, dir),
        }
    }
}
